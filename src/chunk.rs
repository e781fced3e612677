//! Chunk codec shared by coordinate and level encoding.
//!
//! A value is split into 5-bit groups, least significant first. Every group
//! except the last carries the `0x20` continuation flag, and each group is
//! offset by 63 so the output stays within printable ASCII (`?` to `~`).

use crate::error::{DecodeError, Result};

/// Maximum number of chunks a single coordinate value may span.
///
/// Six groups of five bits cover a zig-zagged 32-bit magnitude; a seventh
/// continuation is never valid on the wire.
pub const MAX_CHUNKS: usize = 6;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u8 = 0x1F;
const CONTINUATION: u8 = 0x20;
const ALPHABET_OFFSET: u8 = 63;

/// Appends `value` to `out` as a run of 5-bit chunks.
///
/// Always writes at least one character; zero encodes as `?`.
pub fn encode_unsigned(value: u64, out: &mut String) {
    let mut remaining = value;
    loop {
        let mut chunk = (remaining & u64::from(CHUNK_MASK)) as u8;
        if remaining >= u64::from(CONTINUATION) {
            chunk |= CONTINUATION;
        }
        out.push(char::from(chunk + ALPHABET_OFFSET));

        remaining >>= CHUNK_BITS;
        if remaining == 0 {
            break;
        }
    }
}

/// Appends a signed value, folding the sign into the low bit first.
pub fn encode_signed(value: i64, out: &mut String) {
    let folded = if value < 0 { !(value << 1) } else { value << 1 };
    encode_unsigned(folded as u64, out);
}

/// Decodes one signed value starting at `*position`, advancing the cursor
/// past the bytes consumed.
///
/// Fails if the input ends before a byte without the continuation flag, or
/// if the run is longer than [`MAX_CHUNKS`].
pub fn decode_signed(bytes: &[u8], position: &mut usize) -> Result<i64> {
    let start = *position;
    let mut accumulator: i64 = 0;

    for index in 0..MAX_CHUNKS {
        let Some(&byte) = bytes.get(*position) else {
            return Err(DecodeError::SingleCoordinate { position: start });
        };
        let chunk = chunk_value(byte, *position)?;
        accumulator |= i64::from(chunk & CHUNK_MASK) << (CHUNK_BITS as usize * index);
        *position += 1;

        if !has_continuation(chunk) {
            return Ok(unfold(accumulator));
        }
    }

    Err(DecodeError::SingleCoordinate { position: start })
}

/// Maps an encoded byte back to its 6-bit chunk (payload plus continuation).
pub(crate) fn chunk_value(byte: u8, position: usize) -> Result<u8> {
    match byte {
        b'?'..=b'~' => Ok(byte - ALPHABET_OFFSET),
        _ => Err(DecodeError::InvalidCharacter { byte, position }),
    }
}

pub(crate) fn has_continuation(chunk: u8) -> bool {
    chunk & CONTINUATION == CONTINUATION
}

pub(crate) fn payload(chunk: u8) -> u8 {
    chunk & CHUNK_MASK
}

fn unfold(accumulator: i64) -> i64 {
    if accumulator & 0x01 == 0x01 {
        !(accumulator >> 1)
    } else {
        accumulator >> 1
    }
}
