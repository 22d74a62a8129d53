//! Data structures describing a decoded NSF header.
//!
//! ## Header Layout
//!
//! The NSF header is a fixed 128-byte structure; everything this crate
//! decodes lives in the first 0x7C bytes:
//!
//! - Bytes 0-4: `"NESM"` magic plus the 0x1A MS-DOS EOF byte
//! - Byte 5: format version
//! - Bytes 6-7: total song count and starting song (both 1-based)
//! - Bytes 8-13: load/init/play addresses (little-endian)
//! - Bytes 0x0E-0x6D: three 32-byte padded text fields
//! - Bytes 0x6E-0x6F / 0x78-0x79: NTSC / PAL tempo in microseconds per frame
//! - Byte 0x7A: playback-mode register (region bits)
//! - Byte 0x7B: expansion chip register
//!
//! Bytes 0x70-0x77 hold bank-switching registers and are not decoded.

use bitflags::bitflags;

/// Byte offsets of the fixed NSF header fields.
pub mod offsets {
    /// 5-byte magic (`"NESM"` + 0x1A).
    pub const MAGIC: usize = 0x00;
    /// Format version byte.
    pub const VERSION: usize = 0x05;
    /// Total song count (1-based).
    pub const TOTAL_SONGS: usize = 0x06;
    /// Starting song (1-based).
    pub const STARTING_SONG: usize = 0x07;
    /// Load address (16-bit LE).
    pub const LOAD_ADDRESS: usize = 0x08;
    /// Init routine address (16-bit LE).
    pub const INIT_ADDRESS: usize = 0x0A;
    /// Play routine address (16-bit LE).
    pub const PLAY_ADDRESS: usize = 0x0C;
    /// Song name, 32 bytes of padded text.
    pub const SONG_NAME: usize = 0x0E;
    /// Artist name, 32 bytes of padded text.
    pub const ARTIST: usize = 0x2E;
    /// Copyright string, 32 bytes of padded text.
    pub const COPYRIGHT: usize = 0x4E;
    /// NTSC playback speed (16-bit LE, microseconds per frame).
    pub const NTSC_TICKS: usize = 0x6E;
    /// PAL playback speed (16-bit LE, microseconds per frame).
    pub const PAL_TICKS: usize = 0x78;
    /// Playback-mode register byte.
    pub const PLAYBACK_MODE: usize = 0x7A;
    /// Expansion chip register byte.
    pub const CHIP_SUPPORT: usize = 0x7B;
}

/// Expected magic: `"NESM"` followed by the 0x1A MS-DOS EOF byte.
///
/// The decoder stores whatever five bytes the file starts with and never
/// rejects a mismatch; compare via [`SongMetadata::has_valid_magic`].
pub const MAGIC: [u8; 5] = *b"NESM\x1a";

/// Full NSF header size in bytes.
pub const HEADER_LEN: usize = 0x80;

/// Minimum buffer length required to decode every header field.
pub const MIN_HEADER_LEN: usize = 0x7C;

/// Length of each padded text field (song name, artist, copyright).
pub const TEXT_LEN: usize = 32;

/// Placeholder substituted for a text field that contains only padding.
pub const UNKNOWN_FIELD: &str = "<?>";

bitflags! {
    /// Playback-mode register byte at offset 0x7A.
    ///
    /// Both bits use clear-means-supported sense: a zero byte is an
    /// NTSC file that also runs on PAL hardware. Bits above bit 1 are
    /// discarded on decode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PlaybackFlags: u8 {
        /// Region select (0 = NTSC, 1 = PAL).
        const PAL = 0x01;
        /// Region restriction (0 = dual NTSC/PAL, 1 = single region).
        const SINGLE_REGION = 0x02;
    }
}

impl PlaybackFlags {
    /// Create playback flags from the raw register value.
    pub fn from_register(value: u8) -> Self {
        PlaybackFlags::from_bits_truncate(value)
    }

    /// Check whether the file uses the NTSC clock rate.
    ///
    /// When this returns `false` the file uses the PAL clock rate.
    pub fn is_ntsc(&self) -> bool {
        !self.contains(PlaybackFlags::PAL)
    }

    /// Check whether the file supports both NTSC and PAL clock rates.
    pub fn is_dual_supportive(&self) -> bool {
        !self.contains(PlaybackFlags::SINGLE_REGION)
    }
}

bitflags! {
    /// Expansion chip register byte at offset 0x7B.
    ///
    /// One bit per expansion audio chip the song requires. Bits above
    /// bit 5 are reserved and discarded on decode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ExpansionChips: u8 {
        /// Konami VRC6.
        const VRC6 = 0x01;
        /// Konami VRC7.
        const VRC7 = 0x02;
        /// Famicom Disk System.
        const FDS = 0x04;
        /// Nintendo MMC5.
        const MMC5 = 0x08;
        /// Namco 163.
        const NAMCO163 = 0x10;
        /// Sunsoft 5B.
        const SUNSOFT5B = 0x20;
    }
}

impl ExpansionChips {
    /// Create chip flags from the raw register value.
    pub fn from_register(value: u8) -> Self {
        ExpansionChips::from_bits_truncate(value)
    }

    /// Check whether the song uses the VRC6 chip.
    pub fn uses_vrc6(&self) -> bool {
        self.contains(ExpansionChips::VRC6)
    }

    /// Check whether the song uses the VRC7 chip.
    pub fn uses_vrc7(&self) -> bool {
        self.contains(ExpansionChips::VRC7)
    }

    /// Check whether the song uses FDS audio.
    pub fn uses_fds(&self) -> bool {
        self.contains(ExpansionChips::FDS)
    }

    /// Check whether the song uses the MMC5 chip.
    pub fn uses_mmc5(&self) -> bool {
        self.contains(ExpansionChips::MMC5)
    }

    /// Check whether the song uses the Namco 163 chip.
    pub fn uses_namco(&self) -> bool {
        self.contains(ExpansionChips::NAMCO163)
    }

    /// Check whether the song uses the Sunsoft 5B chip.
    pub fn uses_sunsoft(&self) -> bool {
        self.contains(ExpansionChips::SUNSOFT5B)
    }

    /// Display names of the active chips, in bit order.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (ExpansionChips::VRC6, "VRC6"),
            (ExpansionChips::VRC7, "VRC7"),
            (ExpansionChips::FDS, "FDS"),
            (ExpansionChips::MMC5, "MMC5"),
            (ExpansionChips::NAMCO163, "Namco 163"),
            (ExpansionChips::SUNSOFT5B, "Sunsoft 5B"),
        ]
        .iter()
        .filter(|(chip, _)| self.contains(*chip))
        .map(|&(_, name)| name)
        .collect()
    }
}

/// Metadata extracted from an NSF file header.
///
/// Built once per decode by [`parse_nsf`](crate::parse_nsf); carries no
/// mutation API. Every field is derived purely from the input bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongMetadata {
    /// First five raw header bytes, unmodified (expected: [`MAGIC`]).
    pub magic: [u8; 5],
    /// NSF specification version.
    pub version: u8,
    /// Total number of songs in the file.
    ///
    /// 1-based count: a value of `1` means exactly one song. The
    /// decoder passes `0` through unchanged.
    pub total_songs: u8,
    /// Default song number (1-based, like [`total_songs`](Self::total_songs)).
    pub starting_song: u8,
    /// Address the song data is loaded to, nominally 0x8000-0xFFFF.
    ///
    /// Out-of-range values are passed through unchanged.
    pub load_address: u16,
    /// Init routine entry point, nominally 0x8000-0xFFFF.
    pub init_address: u16,
    /// Play routine entry point, nominally 0x8000-0xFFFF.
    pub play_address: u16,
    /// Song title, or [`UNKNOWN_FIELD`] when the file carries none.
    pub song_name: String,
    /// Artist/composer name, or [`UNKNOWN_FIELD`] when absent.
    pub artist: String,
    /// Copyright string, or [`UNKNOWN_FIELD`] when absent.
    pub copyright: String,
    /// Playback speed in microseconds per frame, read from the tempo
    /// field matching the file's region.
    pub song_ticks: u16,
    /// Playback-mode register (region and dual-support bits).
    pub playback: PlaybackFlags,
    /// Expansion audio chips the song requires.
    pub chips: ExpansionChips,
}

impl SongMetadata {
    /// Check the stored magic against the expected [`MAGIC`] constant.
    pub fn has_valid_magic(&self) -> bool {
        self.magic == MAGIC
    }

    /// Check whether the file uses the NTSC clock rate.
    pub fn is_ntsc(&self) -> bool {
        self.playback.is_ntsc()
    }

    /// Check whether the file supports both NTSC and PAL clock rates.
    pub fn is_dual_supportive(&self) -> bool {
        self.playback.is_dual_supportive()
    }
}
