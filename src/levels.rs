//! Level encoding and decoding.
//!
//! Levels use the chunk alphabet without the sign fold. Decoding finds each
//! value by scanning for its terminating chunk (the first byte without the
//! continuation flag) and then folds the run most significant chunk first.

use crate::chunk;
use crate::error::{DecodeError, Result};

/// Encodes levels as concatenated unsigned chunk runs.
pub fn encode_levels(levels: &[u32]) -> String {
    let mut encoded = String::with_capacity(levels.len());
    for &level in levels {
        chunk::encode_unsigned(u64::from(level), &mut encoded);
    }
    encoded
}

/// Decodes a level string.
///
/// Fails if the input ends in the middle of a value. An empty string decodes
/// to an empty list.
pub fn decode_levels(encoded: &str) -> Result<Vec<u32>> {
    let bytes = encoded.as_bytes();
    let mut position = 0;
    let mut levels = Vec::new();

    while position < bytes.len() {
        let run = extract_next_chunk(bytes, position)?;
        levels.push(aggregate(run, position)?);
        position += run.len();
    }

    Ok(levels)
}

/// Returns the run from `start` through the next terminating byte, inclusive.
fn extract_next_chunk(bytes: &[u8], start: usize) -> Result<&[u8]> {
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        let value = chunk::chunk_value(byte, start + offset)?;
        if !chunk::has_continuation(value) {
            return Ok(&bytes[start..=start + offset]);
        }
    }

    Err(DecodeError::ChunkExtraction { position: start })
}

fn aggregate(run: &[u8], start: usize) -> Result<u32> {
    let mut level: u64 = 0;
    for &byte in run.iter().rev() {
        // Already validated by the scan.
        let value = chunk::payload(byte.wrapping_sub(63));
        level = (level << 5) | u64::from(value);
        if level > u64::from(u32::MAX) {
            return Err(DecodeError::LevelOverflow { position: start });
        }
    }
    Ok(level as u32)
}
