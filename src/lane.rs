//! Check that the indexes sharing one lane can be told apart after sequencing errors.
//!
//! Pairs are compared over their common prefix, so a 6 bp and an 8 bp index in
//! the same lane are judged on the 6 bases both are read with.
//!
//! # Examples
//! ```
//! use idxsheet::lane::{check_lane, ConflictReason};
//! let c = check_lane(&["ATCACG", "ATCATG", "GGGGGG"], 3, 2);
//! assert_eq!(c.len(), 1);
//! assert_eq!(c[0].reason, ConflictReason::LevenshteinTooClose { distance: 1 });
//! ```
use core::fmt;

use crate::distance::{levenshtein_distance, prefix_hamming, Mode};

/// Why two indexes in a lane are a problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConflictReason {
    /// The same sequence is assigned twice.
    Identical,
    /// Edit distance below the minimum. Checked before Hamming.
    LevenshteinTooClose { distance: usize },
    /// Mismatch count below the minimum.
    HammingTooClose { distance: usize },
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::Identical => write!(f, "identical"),
            ConflictReason::LevenshteinTooClose { distance } => write!(f, "levenshtein distance {distance}"),
            ConflictReason::HammingTooClose { distance } => write!(f, "hamming distance {distance}"),
        }
    }
}

/// One pair of lane indexes that is too similar.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Conflict {
    pub a: String,
    pub b: String,
    pub reason: ConflictReason,
}

/// Classify a single pair, or `None` when the two are far enough apart.
pub fn check_pair(a: &str, b: &str, min_hamming: usize, min_levenshtein: usize) -> Option<ConflictReason> {
    if a == b {
        return Some(ConflictReason::Identical);
    }
    let lev = levenshtein_distance(a.as_bytes(), b.as_bytes(), Mode::ShortestPrefix);
    if lev < min_levenshtein {
        return Some(ConflictReason::LevenshteinTooClose { distance: lev });
    }
    let ham = prefix_hamming(a.as_bytes(), b.as_bytes());
    if ham < min_hamming {
        return Some(ConflictReason::HammingTooClose { distance: ham });
    }
    None
}

/// Every pair of `sequences` that is too close, in sorted pair order.
///
/// `sequences` is the list of indexes assigned to one lane; a sequence listed
/// twice is reported as [`ConflictReason::Identical`].
pub fn check_lane<S: AsRef<str>>(sequences: &[S], min_hamming: usize, min_levenshtein: usize) -> Vec<Conflict> {
    let mut sorted: Vec<&str> = sequences.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    let mut conflicts = Vec::new();
    for (i, a) in sorted.iter().enumerate() {
        for b in &sorted[i + 1..] {
            if let Some(reason) = check_pair(a, b, min_hamming, min_levenshtein) {
                conflicts.push(Conflict { a: a.to_string(), b: b.to_string(), reason });
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod lane_tests {
    use super::*;

    #[test]
    fn duplicate_assignment_is_identical() {
        let c = check_lane(&["ATCACG", "ATCACG"], 3, 2);
        assert_eq!(c, vec![Conflict { a: "ATCACG".into(), b: "ATCACG".into(), reason: ConflictReason::Identical }]);
    }

    #[test]
    fn levenshtein_is_checked_before_hamming() {
        let c = check_lane(&["ATCACG", "ATCATG"], 3, 2);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].reason, ConflictReason::LevenshteinTooClose { distance: 1 });
    }

    #[test]
    fn hamming_fires_when_edits_are_enough() {
        // Two substitutions: edit distance 2 passes, Hamming 2 does not.
        let c = check_lane(&["ATCACG", "ATGAGG"], 3, 2);
        assert_eq!(c[0].reason, ConflictReason::HammingTooClose { distance: 2 });
        assert!(check_lane(&["ATCACG", "ATGAGG"], 2, 2).is_empty());
    }

    #[test]
    fn distinct_indexes_pass() {
        assert!(check_lane(&["ATCACG", "GGGGGG"], 3, 2).is_empty());
        assert!(check_lane::<&str>(&[], 3, 2).is_empty());
        assert!(check_lane(&["ATCACG"], 3, 2).is_empty());
    }

    #[test]
    fn mixed_lengths_compare_on_the_common_prefix() {
        // The 8 bp index starts with the 6 bp one.
        let c = check_lane(&["CAGATCTG", "CAGATC"], 3, 2);
        assert_eq!(c[0].reason, ConflictReason::LevenshteinTooClose { distance: 0 });
    }

    #[test]
    fn conflicts_follow_sorted_pair_order() {
        let lane = vec!["TTAGGC".to_string(), "ATCACG".to_string(), "ATCACG".to_string(), "TTAGGA".to_string()];
        let c = check_lane(&lane, 3, 2);
        let pairs: Vec<(&str, &str)> = c.iter().map(|x| (x.a.as_str(), x.b.as_str())).collect();
        assert_eq!(pairs, vec![("ATCACG", "ATCACG"), ("TTAGGA", "TTAGGC")]);
    }
}
