//! SureSelect indexes `sureselect1`–`sureselect16`.

use crate::kit::{bc, BarcodeRecord, Provenance};

pub const PROVENANCE: Provenance = Provenance {
    source: "oligo_reference-halo8.csv",
    reference: "SureSelect index column",
    notes: "sureselect1-sureselect12 repeat the first twelve Illumina indexes.",
};

/// SureSelect indexes, 6 bp.
pub const SURESELECT: &[BarcodeRecord] = &[
    bc("sureselect1", "ATCACG"),
    bc("sureselect2", "CGATGT"),
    bc("sureselect3", "TTAGGC"),
    bc("sureselect4", "TGACCA"),
    bc("sureselect5", "ACAGTG"),
    bc("sureselect6", "GCCAAT"),
    bc("sureselect7", "CAGATC"),
    bc("sureselect8", "ACTTGA"),
    bc("sureselect9", "GATCAG"),
    bc("sureselect10", "TAGCTT"),
    bc("sureselect11", "GGCTAC"),
    bc("sureselect12", "CTTGTA"),
    bc("sureselect13", "AAACAT"),
    bc("sureselect14", "CAAAAG"),
    bc("sureselect15", "GAAACC"),
    bc("sureselect16", "AAAGCA"),
];
