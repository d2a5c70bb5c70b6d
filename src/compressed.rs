use crate::cursor::{Chars, RunCursor};
use crate::error::{DecodeError, Result};
use crate::parser::parse_runs;
use crate::run::Run;
use ahash::AHashMap as HashMap;
use std::str::FromStr;

/// A parsed compressed string.
///
/// Holds the immutable run sequence produced once from the encoded input.
/// Any number of cursors can borrow it and decode it independently; the
/// expanded string is never materialized.
///
/// # Example
///
/// ```
/// use rle_iter::CompressedString;
///
/// let compressed = CompressedString::parse("L1e2t1C1o1d1e1").unwrap();
/// assert_eq!(compressed.decoded_len(), 8);
///
/// let decoded: String = compressed.chars().collect();
/// assert_eq!(decoded, "LeetCode");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedString {
    runs: Vec<Run>,

    /// Length in bytes of the encoded input
    encoded_len: usize,

    /// Total number of characters the runs expand to
    decoded_len: u64,
}

impl CompressedString {
    /// Parses `encoded` into its run sequence.
    pub fn parse(encoded: &str) -> Result<Self> {
        let runs = parse_runs(encoded)?;
        let decoded_len = runs.iter().map(|run| u64::from(run.repeat())).sum();

        Ok(Self {
            runs,
            encoded_len: encoded.len(),
            decoded_len,
        })
    }

    /// Returns the runs in decoding order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Returns the number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns true if the string decodes to nothing.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the number of characters the string decodes to.
    pub fn decoded_len(&self) -> u64 {
        self.decoded_len
    }

    /// Returns a cursor borrowing this run sequence.
    pub fn cursor(&self) -> RunCursor<&Self> {
        RunCursor::from_runs(self)
    }

    /// Returns an iterator over the decoded characters.
    pub fn chars(&self) -> Chars<&Self> {
        self.cursor().chars()
    }

    /// Returns the total decoded occurrences of each symbol.
    pub fn symbol_counts(&self) -> HashMap<char, u64> {
        let mut counts = HashMap::default();
        for run in &self.runs {
            *counts.entry(run.symbol()).or_insert(0) += u64::from(run.repeat());
        }
        counts
    }

    /// Returns statistics about the encoding.
    pub fn stats(&self) -> RunStats {
        RunStats {
            runs: self.runs.len(),
            encoded_len: self.encoded_len,
            decoded_len: self.decoded_len,
            distinct_symbols: self.symbol_counts().len(),
            longest_run: self.runs.iter().map(Run::repeat).max().unwrap_or(0),
        }
    }
}

impl AsRef<[Run]> for CompressedString {
    fn as_ref(&self) -> &[Run] {
        &self.runs
    }
}

impl FromStr for CompressedString {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a CompressedString {
    type Item = char;
    type IntoIter = Chars<&'a CompressedString>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}

/// Statistics about a compressed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Number of runs after dropping zero-count runs
    pub runs: usize,
    /// Encoded input length in bytes
    pub encoded_len: usize,
    /// Number of characters after expansion
    pub decoded_len: u64,
    /// Number of distinct symbols
    pub distinct_symbols: usize,
    /// Largest single repeat count
    pub longest_run: u32,
}

impl RunStats {
    /// Returns decoded length over encoded length.
    pub fn expansion_ratio(&self) -> f64 {
        if self.encoded_len == 0 {
            0.0
        } else {
            self.decoded_len as f64 / self.encoded_len as f64
        }
    }
}
