//! Cross-catalog overlap report: for each barcode, which other catalog
//! barcodes are identical to it or one or two mismatches away.
//!
//! Useful when deciding which kits can be pooled in one lane.
use polars::prelude::*;

use crate::catalog::Catalog;
use crate::distance::prefix_hamming;
use crate::kit::natural_key;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OverlapRow {
    pub name: String,
    pub sequence: String,
    pub identical: Vec<String>,
    pub one_mismatch: Vec<String>,
    pub two_mismatches: Vec<String>,
}

/// One row per catalog name, in natural name order.
///
/// Sequences of different length are compared over their common prefix.
pub fn overlap_report(catalog: &Catalog) -> Vec<OverlapRow> {
    let mut names: Vec<(&str, &str)> = catalog.iter().collect();
    names.sort_by_key(|(n, _)| natural_key(*n));
    names
        .iter()
        .map(|&(name, seq)| {
            let mut row = OverlapRow { name: name.to_string(), sequence: seq.to_string(), ..Default::default() };
            for &(other, other_seq) in names.iter().filter(|(o, _)| *o != name) {
                match prefix_hamming(seq.as_bytes(), other_seq.as_bytes()) {
                    0 => row.identical.push(other.to_string()),
                    1 => row.one_mismatch.push(other.to_string()),
                    2 => row.two_mismatches.push(other.to_string()),
                    _ => {}
                }
            }
            row
        })
        .collect()
}

/// The report as a DataFrame with space joined name lists.
pub fn overlap_df(rows: &[OverlapRow]) -> PolarsResult<DataFrame> {
    let join = |f: fn(&OverlapRow) -> &Vec<String>| rows.iter().map(|r| f(r).join(" ")).collect::<Vec<_>>();
    df!(
        "Index"          => rows.iter().map(|r| r.name.clone()).collect::<Vec<_>>(),
        "Sequence"       => rows.iter().map(|r| r.sequence.clone()).collect::<Vec<_>>(),
        "Identical"      => join(|r| &r.identical),
        "One mismatch"   => join(|r| &r.one_mismatch),
        "Two mismatches" => join(|r| &r.two_mismatches),
    )
}

#[cfg(test)]
mod overlap_tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn index1_overlaps_its_copies_in_other_kits() {
        let rows = overlap_report(catalog().unwrap());
        assert_eq!(rows.len(), catalog().unwrap().len());
        let r = rows.iter().find(|r| r.name == "index1").unwrap();
        assert_eq!(r.sequence, "ATCACG");
        assert_eq!(r.identical, vec!["agilent1", "rpi1", "sureselect1"]);
        assert!(r.one_mismatch.contains(&"halo19".to_string()));
    }

    #[test]
    fn rows_are_in_natural_order() {
        let rows = overlap_report(catalog().unwrap());
        let idx: Vec<&str> = rows.iter().map(|r| r.name.as_str()).filter(|n| n.starts_with("index")).collect();
        assert_eq!(&idx[..3], &["index1", "index2", "index3"]);
        assert_eq!(idx.last(), Some(&"index27"));
        assert_eq!(rows[0].name, "agilent1");
    }

    #[test]
    fn dataframe_has_report_columns() {
        let rows = overlap_report(catalog().unwrap());
        let df = overlap_df(&rows).unwrap();
        assert_eq!(df.height(), rows.len());
        let cols: Vec<String> = df.get_column_names().iter().map(|c| c.to_string()).collect();
        assert_eq!(cols, ["Index", "Sequence", "Identical", "One mismatch", "Two mismatches"]);
    }
}
