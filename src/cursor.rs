use crate::compressed::CompressedString;
use crate::error::{DecodeError, Result};
use crate::run::Run;
use std::iter::FusedIterator;
use tracing::debug;

/// Position of a cursor within its run sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    /// `remaining_in_run` is always at least 1 while active.
    Active {
        run_index: usize,
        remaining_in_run: u32,
    },
    /// Terminal: every run has been consumed.
    Exhausted,
}

/// Sequential decoder over a run sequence.
///
/// Yields one character per call to [`next`](RunCursor::next) in amortized
/// O(1), tracking which run it is in and how many characters of that run are
/// left. The cursor either borrows its runs (see
/// [`CompressedString::cursor`]) or owns them (see [`StringIterator`]).
#[derive(Debug, Clone)]
pub struct RunCursor<S> {
    runs: S,
    state: CursorState,
    /// Characters left across all runs, including the current one
    remaining: u64,
}

/// A decoder that owns its parsed input.
///
/// # Example
///
/// ```
/// use rle_iter::{DecodeError, StringIterator};
///
/// let mut iter = StringIterator::new("a2b1").unwrap();
/// assert_eq!(iter.next(), Ok('a'));
/// assert_eq!(iter.next(), Ok('a'));
/// assert!(iter.has_next());
/// assert_eq!(iter.next(), Ok('b'));
/// assert!(!iter.has_next());
/// assert_eq!(iter.next(), Err(DecodeError::ExhaustedIterator));
/// ```
pub type StringIterator = RunCursor<CompressedString>;

impl StringIterator {
    /// Parses `encoded` and returns a cursor positioned at its first character.
    pub fn new(encoded: &str) -> Result<Self> {
        Ok(Self::from_runs(CompressedString::parse(encoded)?))
    }

    /// Returns the parsed input.
    pub fn compressed(&self) -> &CompressedString {
        &self.runs
    }
}

impl<S: AsRef<[Run]>> RunCursor<S> {
    /// Creates a cursor positioned at the first character of `runs`.
    pub fn from_runs(runs: S) -> Self {
        let slice = runs.as_ref();
        let remaining = slice.iter().map(|run| u64::from(run.repeat())).sum();
        let state = Self::enter(slice, 0);

        Self {
            runs,
            state,
            remaining,
        }
    }

    /// Returns true if at least one more character can be decoded.
    ///
    /// Never changes what a later [`next`](RunCursor::next) returns.
    pub fn has_next(&self) -> bool {
        matches!(self.state, CursorState::Active { .. })
    }

    /// Decodes the next character.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ExhaustedIterator`] once every run has been
    /// consumed; the cursor stays exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<char> {
        let CursorState::Active {
            run_index,
            remaining_in_run,
        } = self.state
        else {
            return Err(DecodeError::ExhaustedIterator);
        };

        let runs = self.runs.as_ref();
        let symbol = runs[run_index].symbol();
        self.remaining -= 1;

        self.state = if remaining_in_run > 1 {
            CursorState::Active {
                run_index,
                remaining_in_run: remaining_in_run - 1,
            }
        } else {
            Self::enter(runs, run_index + 1)
        };

        Ok(symbol)
    }

    /// Returns the number of characters left to decode.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Returns `(run_index, remaining_in_run)`, or `None` once exhausted.
    pub fn position(&self) -> Option<(usize, u32)> {
        match self.state {
            CursorState::Active {
                run_index,
                remaining_in_run,
            } => Some((run_index, remaining_in_run)),
            CursorState::Exhausted => None,
        }
    }

    /// Returns the run sequence being decoded.
    pub fn runs(&self) -> &[Run] {
        self.runs.as_ref()
    }

    /// Converts the cursor into a standard iterator over the remaining characters.
    pub fn chars(self) -> Chars<S> {
        Chars { cursor: self }
    }

    /// Enters the run at `index`, or the exhausted state past the last run.
    ///
    /// Runs are never empty, so a fresh run always has characters to yield.
    fn enter(runs: &[Run], index: usize) -> CursorState {
        match runs.get(index) {
            Some(run) => CursorState::Active {
                run_index: index,
                remaining_in_run: run.repeat(),
            },
            None => {
                debug!(runs = runs.len(), "cursor exhausted");
                CursorState::Exhausted
            }
        }
    }
}

/// Iterator over the characters left in a [`RunCursor`].
#[derive(Debug, Clone)]
pub struct Chars<S> {
    cursor: RunCursor<S>,
}

impl<S: AsRef<[Run]>> Chars<S> {
    /// Returns the underlying cursor.
    pub fn into_cursor(self) -> RunCursor<S> {
        self.cursor
    }
}

impl<S: AsRef<[Run]>> Iterator for Chars<S> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.cursor.next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.cursor.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<S: AsRef<[Run]>> FusedIterator for Chars<S> {}
