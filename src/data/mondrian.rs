//! Mondrian (Ovation SP Ultralow) indexes `mondrian1`–`mondrian16`.

use crate::kit::{bc, BarcodeRecord, Provenance};

pub const PROVENANCE: Provenance = Provenance {
    source: "User Guide for Ovation SP Ultralow Library System",
    reference: "barcode table",
    notes: "",
};

/// Mondrian indexes, 6 bp.
pub const MONDRIAN: &[BarcodeRecord] = &[
    bc("mondrian1", "AAGGGA"),
    bc("mondrian2", "CCTTCA"),
    bc("mondrian3", "GGACCC"),
    bc("mondrian4", "TTCAGC"),
    bc("mondrian5", "AAGACG"),
    bc("mondrian6", "CCTCGG"),
    bc("mondrian7", "GGATGT"),
    bc("mondrian8", "TTCGCT"),
    bc("mondrian9", "ACACGA"),
    bc("mondrian10", "CACACA"),
    bc("mondrian11", "GTGTTA"),
    bc("mondrian12", "TGTGAA"),
    bc("mondrian13", "ACAAAC"),
    bc("mondrian14", "CACCTC"),
    bc("mondrian15", "GTGGCC"),
    bc("mondrian16", "TGTTGC"),
];
