//! # rle-iter - Run-Length Encoded String Decoding
//!
//! Decodes compressed strings made of letters followed by decimal repeat
//! counts, one character at a time, without expanding the whole string.
//!
//! The input is parsed once into an immutable sequence of runs
//! (`(symbol, repeat)` pairs). A cursor then walks that sequence, tracking
//! which run it is in and how many characters of that run are left.
//!
//! ## Example
//!
//! ```
//! use rle_iter::StringIterator;
//!
//! let mut iter = StringIterator::new("L1e2t1C1o1d1e1").unwrap();
//!
//! let mut decoded = String::new();
//! while iter.has_next() {
//!     decoded.push(iter.next().unwrap());
//! }
//! assert_eq!(decoded, "LeetCode");
//! ```
//!
//! ## Encoding
//!
//! - Every ASCII letter starts a run; the digits after it are its count.
//! - A letter with no digits counts once (`"ab2"` decodes to `"abb"`).
//! - A zero count drops the run (`"a0b1"` decodes to `"b"`).
//! - A digit with no letter before it is a [`DecodeError::MalformedEncoding`].
//!
//! ## Performance
//!
//! - O(n) parsing in the length of the encoded input
//! - O(1) per decoded character, with memory proportional to the number of runs

mod compressed;
mod cursor;
mod error;
mod parser;
mod run;

#[cfg(test)]
mod tests;

pub use compressed::{CompressedString, RunStats};
pub use cursor::{Chars, RunCursor, StringIterator};
pub use error::{DecodeError, MalformedReason, Result};
pub use parser::parse_runs;
pub use run::Run;
