//! File loading entry point for NSF metadata extraction.

use std::fs;
use std::path::Path;

use crate::error::{NsfError, Result};
use crate::format::SongMetadata;
use crate::parser::parse_nsf;

/// Read the NSF file at `path` and decode its header.
///
/// A file that cannot be opened or read surfaces as [`NsfError::Io`]
/// with the path and underlying cause attached; everything else is the
/// plain [`parse_nsf`] pass over the file contents.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<SongMetadata> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| NsfError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_nsf(&data)
}
