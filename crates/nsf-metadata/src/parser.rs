//! NSF header decoder producing [`SongMetadata`] values.
//!
//! The decoder borrows an immutable byte slice and performs explicit
//! offset-based reads; there is no shared cursor and no field read
//! depends on the order of any other. Every read is bounds-checked up
//! front and a short buffer surfaces as [`NsfError::Truncated`] rather
//! than a panic.
//!
//! The decoder extracts, it does not validate: unrecognized magic
//! bytes, out-of-range addresses, and reserved chip bits are all passed
//! through for the caller to judge.

use crate::error::{NsfError, Result};
use crate::format::{
    ExpansionChips, PlaybackFlags, SongMetadata, TEXT_LEN, UNKNOWN_FIELD, offsets,
};

/// Decode an NSF header from raw bytes.
///
/// `data` must cover the header through offset 0x7B; trailing song data
/// is ignored. Decoding is a pure function of the input, so the same
/// buffer always yields the same metadata.
pub fn parse_nsf(data: &[u8]) -> Result<SongMetadata> {
    NsfParser { data }.parse()
}

struct NsfParser<'a> {
    data: &'a [u8],
}

impl<'a> NsfParser<'a> {
    fn parse(&self) -> Result<SongMetadata> {
        let magic = self.read_array::<5>(offsets::MAGIC)?;
        let version = self.read_u8(offsets::VERSION)?;
        let total_songs = self.read_u8(offsets::TOTAL_SONGS)?;
        let starting_song = self.read_u8(offsets::STARTING_SONG)?;

        let load_address = self.read_u16_le(offsets::LOAD_ADDRESS)?;
        let init_address = self.read_u16_le(offsets::INIT_ADDRESS)?;
        let play_address = self.read_u16_le(offsets::PLAY_ADDRESS)?;

        let song_name = self.read_text(offsets::SONG_NAME)?;
        let artist = self.read_text(offsets::ARTIST)?;
        let copyright = self.read_text(offsets::COPYRIGHT)?;

        let playback = PlaybackFlags::from_register(self.read_u8(offsets::PLAYBACK_MODE)?);
        let song_ticks = if playback.is_ntsc() {
            self.read_u16_le(offsets::NTSC_TICKS)?
        } else {
            self.read_u16_le(offsets::PAL_TICKS)?
        };

        let chips = ExpansionChips::from_register(self.read_u8(offsets::CHIP_SUPPORT)?);

        Ok(SongMetadata {
            magic,
            version,
            total_songs,
            starting_song,
            load_address,
            init_address,
            play_address,
            song_name,
            artist,
            copyright,
            song_ticks,
            playback,
            chips,
        })
    }

    /// Decode a 32-byte padded text field.
    ///
    /// Trailing NUL and space padding is trimmed; a field that trims to
    /// empty becomes the `"<?>"` placeholder.
    fn read_text(&self, offset: usize) -> Result<String> {
        self.ensure_range(offset, TEXT_LEN)?;
        let raw = &self.data[offset..offset + TEXT_LEN];
        let text = String::from_utf8_lossy(raw);
        let trimmed = text.trim_end_matches(['\0', ' ']);
        if trimmed.is_empty() {
            Ok(UNKNOWN_FIELD.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }

    fn read_u8(&self, offset: usize) -> Result<u8> {
        self.ensure_range(offset, 1)?;
        Ok(self.data[offset])
    }

    fn read_u16_le(&self, offset: usize) -> Result<u16> {
        self.ensure_range(offset, 2)?;
        Ok(u16::from_le_bytes([
            self.data[offset],
            self.data[offset + 1],
        ]))
    }

    fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        self.ensure_range(offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[offset..offset + N]);
        Ok(out)
    }

    fn ensure_range(&self, offset: usize, len: usize) -> Result<()> {
        let end = offset.saturating_add(len);
        if end > self.data.len() {
            return Err(NsfError::Truncated {
                expected: end,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}
