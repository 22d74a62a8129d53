//! Command-line metadata inspector for NSF files.
//!
//! Scans files and directories for NSF chiptunes and prints the header
//! metadata of each, either as human-readable text blocks or as one
//! JSON document for tooling.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use walkdir::WalkDir;

use nsf_metadata::{NsfError, SongMetadata, load_file};

#[derive(Parser)]
#[command(name = "nsf-info")]
#[command(about = "Extract metadata from NES Sound Format files")]
struct Args {
    /// NSF files or directories (directories are scanned recursively)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Emit a JSON document instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Pretty print JSON output (implies --json)
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct TrackRecord {
    path: String,
    title: String,
    artist: String,
    copyright: String,
    version: u8,
    total_songs: u8,
    starting_song: u8,
    load_address: u16,
    init_address: u16,
    play_address: u16,
    region: &'static str,
    dual_region: bool,
    ticks_us_per_frame: u16,
    chips: Vec<&'static str>,
    valid_magic: bool,
}

impl TrackRecord {
    fn new(path: &Path, meta: &SongMetadata) -> Self {
        Self {
            path: path.display().to_string(),
            title: meta.song_name.clone(),
            artist: meta.artist.clone(),
            copyright: meta.copyright.clone(),
            version: meta.version,
            total_songs: meta.total_songs,
            starting_song: meta.starting_song,
            load_address: meta.load_address,
            init_address: meta.init_address,
            play_address: meta.play_address,
            region: region_label(meta),
            dual_region: meta.is_dual_supportive(),
            ticks_us_per_frame: meta.song_ticks,
            chips: meta.chips.names(),
            valid_magic: meta.has_valid_magic(),
        }
    }
}

fn region_label(meta: &SongMetadata) -> &'static str {
    if meta.is_ntsc() { "NTSC" } else { "PAL" }
}

fn has_nsf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("nsf"))
}

/// Expand the argument list into concrete NSF file paths.
///
/// Plain file arguments are taken as given so an oddly named file can
/// still be inspected; only directory scans filter by extension.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() && has_nsf_extension(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn print_track(path: &Path, meta: &SongMetadata) {
    println!("{}", path.display());
    if !meta.has_valid_magic() {
        println!("  Warning: unrecognized header magic {:02X?}", meta.magic);
    }
    println!("  Title:     {}", meta.song_name);
    println!("  Artist:    {}", meta.artist);
    println!("  Copyright: {}", meta.copyright);
    println!(
        "  Songs:     {} (starting at {}), NSF v{}",
        meta.total_songs, meta.starting_song, meta.version
    );
    println!(
        "  Load/Init/Play: ${:04X}/${:04X}/${:04X}",
        meta.load_address, meta.init_address, meta.play_address
    );
    println!(
        "  Region:    {}{}, {} us/frame",
        region_label(meta),
        if meta.is_dual_supportive() {
            " (dual NTSC/PAL)"
        } else {
            ""
        },
        meta.song_ticks
    );
    let chips = meta.chips.names();
    println!(
        "  Expansion: {}",
        if chips.is_empty() {
            "none".to_string()
        } else {
            chips.join(", ")
        }
    );
    println!();
}

fn main() -> ExitCode {
    let args = Args::parse();
    let as_json = args.json || args.pretty;

    let files = collect_files(&args.paths);
    if files.is_empty() {
        eprintln!("No NSF files found");
        return ExitCode::FAILURE;
    }

    let mut records = Vec::new();
    let mut failed = false;

    for file in &files {
        match load_file(file) {
            Ok(meta) => {
                if as_json {
                    records.push(TrackRecord::new(file, &meta));
                } else {
                    print_track(file, &meta);
                }
            }
            Err(err) => {
                // Io errors already carry the path in their message.
                match &err {
                    NsfError::Io { .. } => eprintln!("{err}"),
                    _ => eprintln!("{}: {err}", file.display()),
                }
                failed = true;
            }
        }
    }

    if as_json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&records)
        } else {
            serde_json::to_string(&records)
        };
        match json {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("Failed to serialize output: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
