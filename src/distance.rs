//! Hamming and Levenshtein distances over short index sequences.
//!
//! Both functions work on bytes and accept a [`Mode`]:
//! - [`Mode::Strict`] compares the sequences as given. Hamming then requires
//!   equal lengths and fails with [`Error::LengthMismatch`] otherwise.
//! - [`Mode::ShortestPrefix`] truncates both inputs to the shorter length first,
//!   so an 8 bp index can be compared with a 6 bp one on their common window.
//!
//! # Examples
//! ```
//! use idxsheet::distance::{hamming_distance, levenshtein_distance, Mode};
//! assert_eq!(hamming_distance(b"ATCACG", b"ATCATG", Mode::Strict).unwrap(), 1);
//! assert!(hamming_distance(b"ATCACG", b"ATCACGA", Mode::Strict).is_err());
//! assert_eq!(hamming_distance(b"ATCACG", b"ATCACGA", Mode::ShortestPrefix).unwrap(), 0);
//! assert_eq!(levenshtein_distance(b"ATCACG", b"ATCAC", Mode::Strict), 1);
//! ```
use crate::error::{Error, Result};

/// How sequences of different length are treated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Compare as given.
    #[default]
    Strict,
    /// Compare only the first `min(len(a), len(b))` symbols.
    ShortestPrefix,
}

/// Outcome of a strict comparison where unequal lengths are an expected case.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comparison {
    /// Equal lengths; number of mismatching positions.
    Distance(usize),
    /// Lengths differ, so the pair has no positional distance.
    NotComparable,
}

fn truncate<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8]) {
    let n = a.len().min(b.len());
    (&a[..n], &b[..n])
}

fn mismatches(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Count mismatching positions over the common prefix. Never fails.
#[inline]
pub fn prefix_hamming(a: &[u8], b: &[u8]) -> usize {
    let (a, b) = truncate(a, b);
    mismatches(a, b)
}

/// Hamming distance between `a` and `b`.
///
/// In [`Mode::Strict`] the lengths must be equal.
pub fn hamming_distance(a: &[u8], b: &[u8], mode: Mode) -> Result<usize> {
    match mode {
        Mode::ShortestPrefix => Ok(prefix_hamming(a, b)),
        Mode::Strict if a.len() != b.len() => Err(Error::LengthMismatch { left: a.len(), right: b.len() }),
        Mode::Strict => Ok(mismatches(a, b)),
    }
}

/// Strict Hamming comparison with the length mismatch as a value instead of an error.
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> Comparison {
    if a.len() == b.len() { Comparison::Distance(mismatches(a, b)) } else { Comparison::NotComparable }
}

/// Levenshtein edit distance (unit cost insert, delete and substitute).
///
/// Uses one rolling row sized by the shorter input.
pub fn levenshtein_distance(a: &[u8], b: &[u8], mode: Mode) -> usize {
    let (a, b) = match mode {
        Mode::Strict => (a, b),
        Mode::ShortestPrefix => truncate(a, b),
    };
    // The row runs along the shorter sequence.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, &cl) in long.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cs) in short.iter().enumerate() {
            let sub = diag + usize::from(cl != cs);
            diag = row[j + 1];
            row[j + 1] = sub.min(row[j] + 1).min(diag + 1);
        }
    }
    row[short.len()]
}

#[cfg(test)]
mod distance_tests {
    use super::*;
    use bio::alignment::distance::{hamming, levenshtein};

    const SEQS: &[&[u8]] = &[
        b"", b"A", b"ATCACG", b"ATCATG", b"ATCAC", b"CGATGT", b"GGGGGG", b"AACGTGAT", b"TCACGA", b"ATCACGAT",
    ];

    #[test]
    fn strict_hamming_counts_positions_and_is_symmetric() {
        for a in SEQS {
            for b in SEQS.iter().filter(|b| b.len() == a.len()) {
                let d = hamming_distance(a, b, Mode::Strict).unwrap();
                assert_eq!(d, hamming(a, b) as usize);
                assert_eq!(d, hamming_distance(b, a, Mode::Strict).unwrap());
            }
            assert_eq!(hamming_distance(a, a, Mode::Strict).unwrap(), 0);
        }
    }

    #[test]
    fn strict_hamming_rejects_unequal_lengths() {
        match hamming_distance(b"ATCACG", b"AACGTGAT", Mode::Strict) {
            Err(Error::LengthMismatch { left: 6, right: 8 }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn prefix_hamming_equals_strict_on_truncated_inputs() {
        for a in SEQS {
            for b in SEQS {
                let n = a.len().min(b.len());
                assert_eq!(
                    hamming_distance(a, b, Mode::ShortestPrefix).unwrap(),
                    hamming_distance(&a[..n], &b[..n], Mode::Strict).unwrap()
                );
            }
        }
        assert_eq!(hamming_distance(b"", b"ACGT", Mode::ShortestPrefix).unwrap(), 0);
        assert_eq!(hamming_distance(b"", b"", Mode::Strict).unwrap(), 0);
    }

    #[test]
    fn compare_makes_length_mismatch_a_branch() {
        assert_eq!(compare(b"ATCACG", b"ATCATG"), Comparison::Distance(1));
        assert_eq!(compare(b"ATCACG", b"AACGTGAT"), Comparison::NotComparable);
    }

    #[test]
    fn levenshtein_reference_values() {
        assert_eq!(levenshtein_distance(b"ATCACG", b"ATCACG", Mode::Strict), 0);
        assert_eq!(levenshtein_distance(b"ATCACG", b"ATCATG", Mode::Strict), 1);
        assert_eq!(levenshtein_distance(b"ATCACG", b"ATCAC", Mode::Strict), 1);
        assert_eq!(levenshtein_distance(b"ATCACG", b"TCACGA", Mode::Strict), 2);
        assert_eq!(levenshtein_distance(b"", b"ACG", Mode::Strict), 3);
        assert_eq!(levenshtein_distance(b"ATCACG", b"ATCACGAT", Mode::ShortestPrefix), 0);
        assert_eq!(levenshtein_distance(b"", b"ACG", Mode::ShortestPrefix), 0);
    }

    #[test]
    fn levenshtein_agrees_with_bio_and_is_a_metric() {
        for a in SEQS {
            for b in SEQS {
                let d = levenshtein_distance(a, b, Mode::Strict);
                assert_eq!(d, levenshtein(a, b) as usize, "{a:?} {b:?}");
                assert_eq!(d, levenshtein_distance(b, a, Mode::Strict));
                for c in SEQS {
                    let via = levenshtein_distance(a, c, Mode::Strict) + levenshtein_distance(c, b, Mode::Strict);
                    assert!(d <= via);
                }
            }
        }
    }
}
