use thiserror::Error;

/// Why a compressed string was rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// A digit appeared before any letter it could count.
    #[error("count digit without a preceding letter")]
    OrphanDigit,
    /// A repeat count does not fit in 32 bits.
    #[error("repeat count overflows u32")]
    CountOverflow,
    /// A character that is neither an ASCII letter nor an ASCII digit.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
}

/// Error type for decoding compressed strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input could not be parsed into runs.
    #[error("malformed encoding at byte {position}: {reason}")]
    MalformedEncoding {
        position: usize,
        reason: MalformedReason,
    },
    /// `next()` was called after every character had been produced.
    #[error("iterator exhausted")]
    ExhaustedIterator,
}

pub type Result<T> = std::result::Result<T, DecodeError>;
