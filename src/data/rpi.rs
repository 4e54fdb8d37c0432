//! TruSeq Small RNA indexes `rpi1`–`rpi48`.
//!
//! Illumina publishes these as the primer sequence; the values below are the
//! reverse complement, i.e. what is read in the index read.

use crate::kit::{bc, BarcodeRecord, Provenance};

pub const PROVENANCE: Provenance = Provenance {
    source: "Illumina TruSeq Small RNA Sample Prep documentation",
    reference: "TruSeq Small RNA Sample Prep Kits",
    notes: "Stored after reverse-complement conversion.",
};

/// Small RNA (RPI) indexes, 6 bp, already reverse complemented.
pub const RPI: &[BarcodeRecord] = &[
    bc("rpi1", "ATCACG"),
    bc("rpi2", "CGATGT"),
    bc("rpi3", "TTAGGC"),
    bc("rpi4", "TGACCA"),
    bc("rpi5", "ACAGTG"),
    bc("rpi6", "GCCAAT"),
    bc("rpi7", "CAGATC"),
    bc("rpi8", "ACTTGA"),
    bc("rpi9", "GATCAG"),
    bc("rpi10", "TAGCTT"),
    bc("rpi11", "GGCTAC"),
    bc("rpi12", "CTTGTA"),
    bc("rpi13", "AGTCAA"),
    bc("rpi14", "AGTTCC"),
    bc("rpi15", "ATGTCA"),
    bc("rpi16", "CCGTCC"),
    bc("rpi17", "GTAGAG"),
    bc("rpi18", "GTCCGC"),
    bc("rpi19", "GTGAAA"),
    bc("rpi20", "GTGGCC"),
    bc("rpi21", "GTTTCG"),
    bc("rpi22", "CGTACG"),
    bc("rpi23", "GAGTGG"),
    bc("rpi24", "GGTAGC"),
    bc("rpi25", "ACTGAT"),
    bc("rpi26", "ATGAGC"),
    bc("rpi27", "ATTCCT"),
    bc("rpi28", "CAAAAG"),
    bc("rpi29", "CAACTA"),
    bc("rpi30", "CACCGG"),
    bc("rpi31", "CACGAT"),
    bc("rpi32", "CACTCA"),
    bc("rpi33", "CAGGCG"),
    bc("rpi34", "CATGGC"),
    bc("rpi35", "CATTTT"),
    bc("rpi36", "CAAACA"),
    bc("rpi37", "CGGAAT"),
    bc("rpi38", "CTAGCT"),
    bc("rpi39", "CTATAC"),
    bc("rpi40", "CTCAGA"),
    bc("rpi41", "GACGAC"),
    bc("rpi42", "TAATCG"),
    bc("rpi43", "TACAGC"),
    bc("rpi44", "TATAAT"),
    bc("rpi45", "TCATTC"),
    bc("rpi46", "TCCCGA"),
    bc("rpi47", "TCGAAG"),
    bc("rpi48", "TCGGCA"),
];
