use thiserror::Error;

use crate::chunk::MAX_CHUNKS;

/// Convenient result alias for polyline decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors raised while decoding a polyline or level string.
///
/// Encoding never fails; every variant here comes from the decode path.
/// Positions are byte offsets into the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A coordinate value ran past the end of the input, or its continuation
    /// run was longer than the format allows.
    #[error(
        "coordinate value at byte {position} is truncated or longer than {} chunks",
        MAX_CHUNKS
    )]
    SingleCoordinate { position: usize },

    /// The level scan reached the end of the input without a terminating chunk.
    #[error("no chunk terminator found for level starting at byte {position}")]
    ChunkExtraction { position: usize },

    /// A byte outside the `'?'..='~'` polyline alphabet.
    #[error("invalid polyline character {byte:#04x} at byte {position}")]
    InvalidCharacter { byte: u8, position: usize },

    /// A level value does not fit in 32 bits.
    #[error("level starting at byte {position} does not fit in 32 bits")]
    LevelOverflow { position: usize },
}

impl DecodeError {
    /// Byte offset at which decoding failed.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::SingleCoordinate { position }
            | DecodeError::ChunkExtraction { position }
            | DecodeError::InvalidCharacter { position, .. }
            | DecodeError::LevelOverflow { position } => *position,
        }
    }
}
