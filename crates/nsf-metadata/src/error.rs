//! Error types for NSF loading and decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Convenient result alias for NSF decoding.
pub type Result<T> = std::result::Result<T, NsfError>;

/// Errors that may occur while loading or decoding an NSF header.
#[derive(Debug, Error)]
pub enum NsfError {
    /// The NSF file could not be opened or read.
    #[error("error opening NSF file '{}': {source}", path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Buffer ends before a header field that was about to be read.
    #[error("NSF header truncated: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum byte count required to read the field.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },
}
