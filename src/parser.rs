use crate::error::{DecodeError, MalformedReason, Result};
use crate::run::Run;
use std::iter::Peekable;
use std::str::CharIndices;
use tracing::{debug, trace};

/// Parses a compressed string into its ordered run sequence.
///
/// Every ASCII letter starts a run and may be followed by a decimal repeat
/// count. A letter with no digits counts once; a count of zero drops the
/// run entirely. Empty input yields an empty sequence.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedEncoding`] when a digit has no letter
/// before it, a count overflows `u32`, or the input contains anything other
/// than ASCII letters and digits.
///
/// # Example
///
/// ```
/// use rle_iter::{parse_runs, Run};
///
/// let runs = parse_runs("a3b0c").unwrap();
/// assert_eq!(runs, vec![Run::new('a', 3).unwrap(), Run::single('c')]);
/// ```
pub fn parse_runs(encoded: &str) -> Result<Vec<Run>> {
    let mut runs = Vec::new();
    let mut chars = encoded.char_indices().peekable();

    while let Some((position, symbol)) = chars.next() {
        if symbol.is_ascii_digit() {
            return Err(malformed(position, MalformedReason::OrphanDigit));
        }
        if !symbol.is_ascii_alphabetic() {
            return Err(malformed(
                position,
                MalformedReason::UnexpectedCharacter(symbol),
            ));
        }

        let repeat = read_count(&mut chars)?.unwrap_or(1);
        match Run::new(symbol, repeat) {
            Some(run) => runs.push(run),
            None => trace!(position, %symbol, "dropping zero-count run"),
        }
    }

    debug!(
        encoded_len = encoded.len(),
        runs = runs.len(),
        "parsed compressed string"
    );
    Ok(runs)
}

/// Consumes the digits following a letter.
///
/// Returns `None` when no digit follows, so a bare letter can be told apart
/// from an explicit count.
fn read_count(chars: &mut Peekable<CharIndices<'_>>) -> Result<Option<u32>> {
    let mut count: Option<u32> = None;

    while let Some(&(position, c)) = chars.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        let value = count
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| malformed(position, MalformedReason::CountOverflow))?;
        count = Some(value);
        chars.next();
    }

    Ok(count)
}

fn malformed(position: usize, reason: MalformedReason) -> DecodeError {
    DecodeError::MalformedEncoding { position, reason }
}
