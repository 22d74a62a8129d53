//! NSF (NES Sound Format) header metadata extraction.
//!
//! This crate reads the fixed 128-byte header of an NSF chiptune file
//! and produces an immutable [`SongMetadata`] value:
//! - Identifying strings (title, artist, copyright)
//! - Song count and the 6502 load/init/play addresses
//! - Region flags and playback tempo
//! - Expansion audio chip requirements (VRC6, VRC7, FDS, MMC5,
//!   Namco 163, Sunsoft 5B)
//!
//! Decoding is a single pure pass over fixed byte offsets; the 6502
//! program embedded in the file is never executed and the
//! bank-switching data is never interpreted.

#![warn(missing_docs)]

pub mod error;
pub mod format;
mod loader;
mod parser;
mod writer;

pub use crate::error::{NsfError, Result};
pub use crate::format::{
    ExpansionChips, HEADER_LEN, MAGIC, MIN_HEADER_LEN, PlaybackFlags, SongMetadata, TEXT_LEN,
    UNKNOWN_FIELD, offsets,
};
pub use crate::loader::load_file;
pub use crate::parser::parse_nsf;
pub use crate::writer::encode_header;

#[cfg(test)]
mod tests {
    use super::*;

    /// Header matching the Super Mario Bros. 2 NSF rip: 34 songs, NTSC
    /// at 16666 microseconds per frame, no expansion chips, no artist
    /// string.
    fn make_smb2_header() -> Vec<u8> {
        let mut data = vec![0u8; HEADER_LEN];
        data[offsets::MAGIC..offsets::MAGIC + 5].copy_from_slice(&MAGIC);
        data[offsets::VERSION] = 1;
        data[offsets::TOTAL_SONGS] = 34;
        data[offsets::STARTING_SONG] = 1;
        data[offsets::LOAD_ADDRESS..offsets::LOAD_ADDRESS + 2]
            .copy_from_slice(&0x8000u16.to_le_bytes());
        data[offsets::INIT_ADDRESS..offsets::INIT_ADDRESS + 2]
            .copy_from_slice(&0x8800u16.to_le_bytes());
        data[offsets::PLAY_ADDRESS..offsets::PLAY_ADDRESS + 2]
            .copy_from_slice(&0x8000u16.to_le_bytes());
        let name = b"Super Mario Bros. 2";
        data[offsets::SONG_NAME..offsets::SONG_NAME + name.len()].copy_from_slice(name);
        let copyright = b"1988 Nintendo";
        data[offsets::COPYRIGHT..offsets::COPYRIGHT + copyright.len()].copy_from_slice(copyright);
        data[offsets::NTSC_TICKS..offsets::NTSC_TICKS + 2]
            .copy_from_slice(&16666u16.to_le_bytes());
        data
    }

    #[test]
    fn test_super_mario_bros_2_header() {
        let meta = parse_nsf(&make_smb2_header()).unwrap();

        assert!(meta.has_valid_magic());
        assert_eq!(meta.version, 1);
        assert_eq!(meta.total_songs, 34);
        assert_eq!(meta.starting_song, 1);
        assert_eq!(meta.load_address, 0x8000);
        assert_eq!(meta.init_address, 0x8800);
        assert_eq!(meta.play_address, 0x8000);
        assert_eq!(meta.song_name, "Super Mario Bros. 2");
        assert_eq!(meta.artist, UNKNOWN_FIELD);
        assert_eq!(meta.copyright, "1988 Nintendo");
        assert_eq!(meta.song_ticks, 16666);
        assert!(meta.is_ntsc());
        assert!(meta.is_dual_supportive());
        assert!(meta.chips.is_empty());
        assert!(!meta.chips.uses_vrc6());
        assert!(!meta.chips.uses_vrc7());
        assert!(!meta.chips.uses_fds());
        assert!(!meta.chips.uses_mmc5());
        assert!(!meta.chips.uses_namco());
        assert!(!meta.chips.uses_sunsoft());
    }

    #[test]
    fn test_decode_is_deterministic() {
        let data = make_smb2_header();
        assert_eq!(parse_nsf(&data).unwrap(), parse_nsf(&data).unwrap());
    }

    #[test]
    fn test_every_short_length_is_truncated() {
        let data = make_smb2_header();
        for len in 0..MIN_HEADER_LEN {
            assert!(
                matches!(
                    parse_nsf(&data[..len]),
                    Err(NsfError::Truncated { .. })
                ),
                "length {len} should fail as truncated"
            );
        }
        assert!(parse_nsf(&data[..MIN_HEADER_LEN]).is_ok());
    }

    #[test]
    fn test_all_chip_bits_set() {
        let mut data = make_smb2_header();
        data[offsets::CHIP_SUPPORT] = 0x3F;
        let meta = parse_nsf(&data).unwrap();
        assert_eq!(meta.chips, ExpansionChips::all());
        assert_eq!(
            meta.chips.names(),
            vec!["VRC6", "VRC7", "FDS", "MMC5", "Namco 163", "Sunsoft 5B"]
        );
    }

    #[test]
    fn test_smb2_header_round_trips() {
        let meta = parse_nsf(&make_smb2_header()).unwrap();
        let decoded = parse_nsf(&encode_header(&meta)).unwrap();
        assert_eq!(decoded, meta);
    }
}
