//! Name the catalog barcodes an observed index sequence matches, exactly or
//! with a few mismatches.
//!
//! The algorithm itself is [`annotate`]. The rest of the module is the line
//! oriented glue around it: pulling an index token out of a text record and
//! rendering the tab separated report row.
//!
//! # Examples
//! ```
//! use idxsheet::annotate::annotate;
//! let catalog = idxsheet::catalog::catalog().unwrap();
//! let a = annotate("ATCACG", catalog, 1);
//! assert_eq!(a.buckets[0], vec!["agilent1", "index1", "rpi1", "sureselect1"]);
//! ```
use anyhow::Result;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::MAX_MISMATCHES;
use crate::distance::{compare, Comparison};

/// Symbols an index token may consist of.
pub const TOKEN_ALPHABET: &[u8] = b"ACGTN-";

/// Catalog names bucketed by mismatch count.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Annotation {
    /// `buckets[i]` holds the names at Hamming distance exactly `i`, sorted.
    pub buckets: Vec<Vec<String>>,
}

impl Annotation {
    /// `true` when no bucket holds a name.
    pub fn is_empty(&self) -> bool { self.buckets.iter().all(Vec::is_empty) }
}

/// Bucket every catalog name whose sequence is within `max_mismatches` of `token`.
///
/// Buckets `0..=max_mismatches` are always present, with `max_mismatches`
/// clamped to [`MAX_MISMATCHES`]. Entries whose length differs from the
/// token's are not comparable and are skipped.
pub fn annotate(token: &str, catalog: &Catalog, max_mismatches: usize) -> Annotation {
    let max_mismatches = max_mismatches.min(MAX_MISMATCHES);
    let mut buckets = vec![Vec::new(); max_mismatches + 1];
    for (name, sequence) in catalog.iter() {
        match compare(token.as_bytes(), sequence.as_bytes()) {
            Comparison::Distance(d) if d <= max_mismatches => buckets[d].push(name.to_string()),
            Comparison::Distance(_) | Comparison::NotComparable => {}
        }
    }
    for b in buckets.iter_mut() {
        b.sort_unstable();
    }
    Annotation { buckets }
}

/// `true` if `col` is made only of [`TOKEN_ALPHABET`] symbols (any case).
pub fn is_index_token(col: &str) -> bool {
    col.bytes().all(|b| TOKEN_ALPHABET.contains(&b.to_ascii_uppercase()))
}

/// First whitespace separated column of `record` that looks like an index
/// sequence, upper-cased.
pub fn extract_index_token(record: &str) -> Option<String> {
    record.split_whitespace().find(|c| is_index_token(c)).map(str::to_ascii_uppercase)
}

/// Header row: `Input\t0 mismatch\t1 mismatch...`, clamped like [`annotate`].
pub fn header_row(max_mismatches: usize) -> String {
    let mut cols = vec!["Input".to_string()];
    cols.extend((0..=max_mismatches.min(MAX_MISMATCHES)).map(|i| format!("{i} mismatch")));
    cols.join("\t")
}

/// The record's own fields followed by one comma joined column per bucket.
pub fn render_row(record: &str, annotation: &Annotation) -> String {
    let mut cols: Vec<String> = record.split_whitespace().map(str::to_string).collect();
    cols.extend(annotation.buckets.iter().map(|b| b.join(",")));
    cols.join("\t")
}

/// Annotate one input record. Records without an index token yield `None`.
pub fn annotate_record(record: &str, catalog: &Catalog, max_mismatches: usize) -> Option<String> {
    let token = extract_index_token(record)?;
    Some(render_row(record, &annotate(&token, catalog, max_mismatches)))
}

/// Annotate many records on a local rayon pool, keeping input order.
///
/// `threads = None` (or `Some(0)`) uses all logical cores.
pub fn annotate_records<S>(records: &[S], catalog: &Catalog, max_mismatches: usize, threads: Option<usize>) -> Result<Vec<Option<String>>>
where
    S: AsRef<str> + Sync,
{
    let n = threads.filter(|&t| t > 0).unwrap_or_else(num_cpus::get);
    let pool = ThreadPoolBuilder::new().num_threads(n).build()?;
    debug!(records = records.len(), threads = n, "annotating");
    Ok(pool.install(|| {
        records
            .par_iter()
            .map(|r| annotate_record(r.as_ref(), catalog, max_mismatches))
            .collect()
    }))
}

#[cfg(test)]
mod annotate_tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::distance::{hamming_distance, Mode};

    #[test]
    fn exact_hits_cross_families() {
        let a = annotate("ATCACG", catalog().unwrap(), 1);
        assert_eq!(a.buckets.len(), 2);
        assert_eq!(a.buckets[0], vec!["agilent1", "index1", "rpi1", "sureselect1"]);
        assert!(!a.buckets[1].is_empty());
    }

    #[test]
    fn one_mismatch_bucket_holds_exactly_the_distance_one_names() {
        let c = catalog().unwrap();
        let a = annotate("ATCACG", c, 1);
        let mut expected: Vec<String> = c
            .iter()
            .filter(|(_, s)| hamming_distance(b"ATCACG", s.as_bytes(), Mode::Strict).ok() == Some(1))
            .map(|(n, _)| n.to_string())
            .collect();
        expected.sort();
        assert_eq!(a.buckets[1], expected);
        assert!(a.buckets[1].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn different_length_entries_are_skipped() {
        let a = annotate("AACGTGAT", catalog().unwrap(), 0);
        assert_eq!(a.buckets, vec![vec!["haloht1".to_string()]]);
        let none = annotate("ACGTACGTAC", catalog().unwrap(), 2);
        assert!(none.is_empty());
        assert_eq!(none.buckets.len(), 3);
    }

    #[test]
    fn oversized_mismatch_counts_are_clamped() {
        let a = annotate("ATCACG", catalog().unwrap(), usize::MAX);
        assert_eq!(a.buckets.len(), MAX_MISMATCHES + 1);
        assert_eq!(a.buckets[0], vec!["agilent1", "index1", "rpi1", "sureselect1"]);
        let six_bp: usize = a.buckets.iter().map(Vec::len).sum();
        assert_eq!(six_bp, catalog().unwrap().iter().filter(|(_, s)| s.len() == 6).count());
        assert_eq!(header_row(usize::MAX).split('\t').count(), MAX_MISMATCHES + 2);
        assert_eq!(header_row(1_000_000_000), header_row(MAX_MISMATCHES));
    }

    #[test]
    fn token_extraction_skips_non_sequence_columns() {
        assert_eq!(extract_index_token("sample_1\tatcacg\tfoo"), Some("ATCACG".to_string()));
        assert_eq!(extract_index_token("lane1 NNNN-A"), Some("NNNN-A".to_string()));
        assert_eq!(extract_index_token("P123 sample"), None);
        assert_eq!(extract_index_token(""), None);
    }

    #[test]
    fn rows_are_tab_separated_with_comma_joined_buckets() {
        assert_eq!(header_row(1), "Input\t0 mismatch\t1 mismatch");
        let row = annotate_record("s1  CAGATC", catalog().unwrap(), 0).unwrap();
        assert_eq!(row, "s1\tCAGATC\tagilent7,index7,rpi7,sureselect7");
        let miss = annotate_record("s2 GGGGGG", catalog().unwrap(), 1).unwrap();
        assert_eq!(miss, "s2\tGGGGGG\t\t");
        assert_eq!(annotate_record("no index here", catalog().unwrap(), 1), None);
    }

    #[test]
    fn batch_keeps_input_order() {
        let recs = vec!["x ATCACG", "nothing", "y CAGATC"];
        let out = annotate_records(&recs, catalog().unwrap(), 0, Some(2)).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out[0].as_deref().unwrap().starts_with("x\tATCACG\t"));
        assert_eq!(out[1], None);
        assert!(out[2].as_deref().unwrap().contains("index7"));
    }
}
