use std::num::NonZeroU32;

/// A single run in the compressed encoding.
///
/// Each run represents `repeat` consecutive occurrences of `symbol`. The
/// count is never zero: zero-count runs decode to nothing and are dropped
/// during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    symbol: char,
    repeat: NonZeroU32,
}

impl Run {
    /// Creates a run, or `None` when `repeat` is zero.
    pub fn new(symbol: char, repeat: u32) -> Option<Self> {
        NonZeroU32::new(repeat).map(|repeat| Self { symbol, repeat })
    }

    /// A run of exactly one occurrence.
    pub fn single(symbol: char) -> Self {
        Self {
            symbol,
            repeat: NonZeroU32::MIN,
        }
    }

    /// The decoded character.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Number of consecutive occurrences (always at least 1).
    pub fn repeat(&self) -> u32 {
        self.repeat.get()
    }
}
