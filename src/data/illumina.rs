//! Illumina TruSeq indexes `index1`–`index27`.
//!
//! From the table "TruSeq RNA and DNA Sample Prep Kits", checked against the
//! Illumina documentation dated 2011-10-11. Numbers 17, 24 and 26 are reserved
//! by Illumina and have no sequence.

use crate::kit::{bc, BarcodeRecord, Provenance};

pub const PROVENANCE: Provenance = Provenance {
    source: "Illumina TruSeq Sample Prep documentation (2011-10-11)",
    reference: "TruSeq RNA and DNA Sample Prep Kits",
    notes: "index17, index24 and index26 are reserved.",
};

/// TruSeq DNA/RNA indexes, 6 bp.
pub const ILLUMINA: &[BarcodeRecord] = &[
    bc("index1", "ATCACG"),
    bc("index2", "CGATGT"),
    bc("index3", "TTAGGC"),
    bc("index4", "TGACCA"),
    bc("index5", "ACAGTG"),
    bc("index6", "GCCAAT"),
    bc("index7", "CAGATC"),
    bc("index8", "ACTTGA"),
    bc("index9", "GATCAG"),
    bc("index10", "TAGCTT"),
    bc("index11", "GGCTAC"),
    bc("index12", "CTTGTA"),
    bc("index13", "AGTCAA"),
    bc("index14", "AGTTCC"),
    bc("index15", "ATGTCA"),
    bc("index16", "CCGTCC"),
    bc("index18", "GTCCGC"),
    bc("index19", "GTGAAA"),
    bc("index20", "GTGGCC"),
    bc("index21", "GTTTCG"),
    bc("index22", "CGTACG"),
    bc("index23", "GAGTGG"),
    bc("index25", "ACTGAT"),
    bc("index27", "ATTCCT"),
];
