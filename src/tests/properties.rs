use crate::{CompressedString, DecodeError, StringIterator};
use proptest::prelude::*;

/// Builds an encoded string and its expected expansion.
///
/// A `None` count writes a bare letter, which decodes to one occurrence.
fn build(runs: &[(char, Option<u32>)]) -> (String, String) {
    let mut encoded = String::new();
    let mut expected = String::new();

    for &(symbol, count) in runs {
        encoded.push(symbol);
        match count {
            Some(n) => {
                encoded.push_str(&n.to_string());
                expected.extend(std::iter::repeat(symbol).take(n as usize));
            }
            None => expected.push(symbol),
        }
    }

    (encoded, expected)
}

/// Drains a decoder through the `has_next`/`next` protocol.
fn drain(iter: &mut StringIterator) -> String {
    let mut result = String::new();
    while iter.has_next() {
        result.push(iter.next().expect("has_next promised a character"));
    }
    result
}

fn letter() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
    ]
}

fn runs_strategy() -> impl Strategy<Value = Vec<(char, Option<u32>)>> {
    prop::collection::vec((letter(), prop::option::of(0u32..40)), 0..24)
}

proptest! {
    /// Property 1: Decoding fidelity
    /// Draining the decoder reproduces the intended expansion.
    #[test]
    fn prop_decode_matches_expansion(runs in runs_strategy()) {
        let (encoded, expected) = build(&runs);
        let mut iter = StringIterator::new(&encoded).unwrap();
        prop_assert_eq!(drain(&mut iter), expected);
    }

    /// Property 2: Exhaustion contract
    /// Once `has_next` is false, every `next` fails.
    #[test]
    fn prop_exhausted_after_drain(runs in runs_strategy(), extra in 1usize..5) {
        let (encoded, _) = build(&runs);
        let mut iter = StringIterator::new(&encoded).unwrap();
        drain(&mut iter);

        for _ in 0..extra {
            prop_assert!(!iter.has_next());
            prop_assert_eq!(iter.next(), Err(DecodeError::ExhaustedIterator));
        }
    }

    /// Property 3: `has_next` is a pure query
    /// Interleaving repeated `has_next` calls does not change the output.
    #[test]
    fn prop_has_next_idempotent(runs in runs_strategy(), probes in 1usize..4) {
        let (encoded, expected) = build(&runs);
        let mut iter = StringIterator::new(&encoded).unwrap();
        let mut result = String::new();

        loop {
            let first = iter.has_next();
            for _ in 0..probes {
                prop_assert_eq!(iter.has_next(), first);
            }
            match iter.next() {
                Ok(c) => {
                    prop_assert!(first);
                    result.push(c);
                }
                Err(err) => {
                    prop_assert!(!first);
                    prop_assert_eq!(err, DecodeError::ExhaustedIterator);
                    break;
                }
            }
        }

        prop_assert_eq!(result, expected);
    }

    /// Property 4: Remaining count
    /// Starts at the decoded length and drops by one per character.
    #[test]
    fn prop_remaining_counts_down(runs in runs_strategy()) {
        let (encoded, expected) = build(&runs);
        let mut iter = StringIterator::new(&encoded).unwrap();
        prop_assert_eq!(iter.remaining(), expected.len() as u64);
        prop_assert_eq!(iter.compressed().decoded_len(), expected.len() as u64);

        let mut left = iter.remaining();
        while iter.next().is_ok() {
            left -= 1;
            prop_assert_eq!(iter.remaining(), left);
        }
        prop_assert_eq!(left, 0);
    }

    /// Property 5: Iterator adapter equivalence
    #[test]
    fn prop_chars_matches_cursor(runs in runs_strategy()) {
        let (encoded, expected) = build(&runs);
        let compressed = CompressedString::parse(&encoded).unwrap();

        let via_chars: String = compressed.chars().collect();
        let mut iter = StringIterator::new(&encoded).unwrap();
        prop_assert_eq!(&via_chars, &drain(&mut iter));
        prop_assert_eq!(via_chars, expected);
    }

    /// Property 6: No materialized zero-count runs
    #[test]
    fn prop_runs_are_nonzero(runs in runs_strategy()) {
        let (encoded, _) = build(&runs);
        let compressed = CompressedString::parse(&encoded).unwrap();
        let nonzero = runs.iter().filter(|(_, count)| *count != Some(0)).count();

        prop_assert_eq!(compressed.len(), nonzero);
        prop_assert!(compressed.runs().iter().all(|run| run.repeat() >= 1));
    }

    /// Property 7: Arbitrary input either parses or is rejected as malformed
    #[test]
    fn prop_arbitrary_input_never_panics(input in any::<String>()) {
        match StringIterator::new(&input) {
            Ok(iter) => {
                let decoded_len = iter.compressed().decoded_len();
                prop_assert_eq!(iter.remaining(), decoded_len);
            }
            Err(err) => {
                let is_malformed = matches!(err, DecodeError::MalformedEncoding { .. });
                prop_assert!(is_malformed);
            }
        }
    }
}

/// Bolero fuzz test: No panics on arbitrary input
#[cfg(test)]
#[test]
fn fuzz_decode_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let encoded = String::from_utf8_lossy(input);
        let Ok(compressed) = CompressedString::parse(&encoded) else {
            return;
        };

        // Bound the work on huge counts
        let mut cursor = compressed.cursor();
        for _ in 0..4096 {
            if cursor.next().is_err() {
                assert!(!cursor.has_next());
                break;
            }
        }
    });
}

/// Bolero fuzz test: Structured runs always decode to their expansion
#[cfg(test)]
#[test]
fn fuzz_structured_roundtrip() {
    bolero::check!()
        .with_type::<Vec<(u8, u8)>>()
        .for_each(|pairs| {
            let runs: Vec<(char, Option<u32>)> = pairs
                .iter()
                .map(|&(letter, count)| {
                    let symbol = char::from(b'a' + letter % 26);
                    let count = (count % 32 != 31).then_some(u32::from(count % 32));
                    (symbol, count)
                })
                .collect();

            let (encoded, expected) = build(&runs);
            let mut iter = StringIterator::new(&encoded).unwrap();
            assert_eq!(drain(&mut iter), expected);
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_build_helper() {
        let (encoded, expected) = build(&[('a', Some(2)), ('b', None), ('c', Some(0))]);
        assert_eq!(encoded, "a2bc0");
        assert_eq!(expected, "aab");
    }

    #[test]
    fn test_original_harness_cases() {
        let cases = [
            ("L1e2t1C1o1d1e1", "LeetCode".to_string()),
            ("", String::new()),
            ("a1", "a".to_string()),
            ("a5", "aaaaa".to_string()),
            ("a10", "a".repeat(10)),
            ("a2b2c2", "aabbcc".to_string()),
            ("x1y1z1", "xyz".to_string()),
            ("A100", "A".repeat(100)),
            ("b3c1d4", "bbbcdddd".to_string()),
            ("Z1", "Z".to_string()),
            ("m2n2", "mmnn".to_string()),
            ("p1q3r1", "pqqqr".to_string()),
            ("s10t1u2", "s".repeat(10) + "tu"),
            ("v1", "v".to_string()),
            ("w999", "w".repeat(999)),
        ];

        for (encoded, expected) in cases {
            let mut iter = StringIterator::new(encoded).unwrap();
            assert_eq!(drain(&mut iter), expected, "decoding {:?}", encoded);
            assert_eq!(iter.next(), Err(DecodeError::ExhaustedIterator));
        }
    }

    #[test]
    fn test_large_count_is_linear() {
        // A count this large would be slow if each step rescanned the runs
        let mut iter = StringIterator::new("a1b200000c1").unwrap();
        let mut count = 0u64;
        while iter.next().is_ok() {
            count += 1;
        }
        assert_eq!(count, 200_002);
    }

    #[test]
    fn test_many_runs() {
        let runs: Vec<(char, Option<u32>)> = (0..5_000)
            .map(|i| (char::from(b'a' + (i % 26) as u8), Some(i % 3 + 1)))
            .collect();
        let (encoded, expected) = build(&runs);

        let mut iter = StringIterator::new(&encoded).unwrap();
        assert_eq!(drain(&mut iter), expected);
    }
}
