//! Caller-supplied thresholds.
//!
//! Nothing in the algorithms hardcodes these values; the defaults are the ones
//! used by the sequencing facility the catalog was written for.

/// Largest mismatch count the annotator reports; larger requests are clamped.
///
/// Every catalog index is at most 8 bp, so no bucket past 8 can ever fill.
pub const MAX_MISMATCHES: usize = 8;

/// Distance thresholds for lane checks and annotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Thresholds {
    /// Two indexes in a lane must differ in at least this many positions.
    pub min_hamming: usize,
    /// Two indexes in a lane must be at least this many edits apart.
    pub min_levenshtein: usize,
    /// Highest mismatch count reported by the annotator, at most [`MAX_MISMATCHES`].
    pub max_mismatches: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds { min_hamming: 3, min_levenshtein: 2, max_mismatches: 1 }
    }
}

/// Options for sample sheet validation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SheetOptions {
    pub thresholds: Thresholds,
    /// Append an `A` to indexes derived from a sample id (some sheets expect a
    /// 7th base read after the 6 bp index).
    pub append_a: bool,
}
