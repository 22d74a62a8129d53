//! NSF header encoder, the inverse of the decoding pass.

use crate::format::{HEADER_LEN, SongMetadata, TEXT_LEN, offsets};

/// Encode metadata back into a 128-byte NSF header.
///
/// Text fields are truncated to 32 bytes and NUL-padded; the `"<?>"`
/// placeholder is written literally, not mapped back to padding. The
/// tempo lands in the field matching the metadata's region with the
/// other tempo field left zero, and the bank-switching region is
/// zero-filled. Decoding the result reproduces the original value.
pub fn encode_header(meta: &SongMetadata) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];

    out[offsets::MAGIC..offsets::MAGIC + 5].copy_from_slice(&meta.magic);
    out[offsets::VERSION] = meta.version;
    out[offsets::TOTAL_SONGS] = meta.total_songs;
    out[offsets::STARTING_SONG] = meta.starting_song;

    out[offsets::LOAD_ADDRESS..offsets::LOAD_ADDRESS + 2]
        .copy_from_slice(&meta.load_address.to_le_bytes());
    out[offsets::INIT_ADDRESS..offsets::INIT_ADDRESS + 2]
        .copy_from_slice(&meta.init_address.to_le_bytes());
    out[offsets::PLAY_ADDRESS..offsets::PLAY_ADDRESS + 2]
        .copy_from_slice(&meta.play_address.to_le_bytes());

    write_text(&mut out, offsets::SONG_NAME, &meta.song_name);
    write_text(&mut out, offsets::ARTIST, &meta.artist);
    write_text(&mut out, offsets::COPYRIGHT, &meta.copyright);

    let ticks_at = if meta.is_ntsc() {
        offsets::NTSC_TICKS
    } else {
        offsets::PAL_TICKS
    };
    out[ticks_at..ticks_at + 2].copy_from_slice(&meta.song_ticks.to_le_bytes());

    out[offsets::PLAYBACK_MODE] = meta.playback.bits();
    out[offsets::CHIP_SUPPORT] = meta.chips.bits();

    out
}

fn write_text(out: &mut [u8], offset: usize, text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(TEXT_LEN);
    out[offset..offset + len].copy_from_slice(&bytes[..len]);
}
