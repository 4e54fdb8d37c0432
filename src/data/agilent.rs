//! Agilent indexes `agilent1`–`agilent96`.
//!
//! Transcribed from the spreadsheet "illumina 96 barcodes plate
//! format_column arrangement".

use crate::kit::{bc, BarcodeRecord, Provenance};

pub const PROVENANCE: Provenance = Provenance {
    source: "illumina 96 barcodes plate format_column arrangement (spreadsheet)",
    reference: "column arrangement, plate positions 1-96",
    notes: "agilent1-agilent12 share their sequence with index1-index12.",
};

/// Agilent 96-plate indexes, 6 bp.
pub const AGILENT: &[BarcodeRecord] = &[
    bc("agilent1", "ATCACG"),
    bc("agilent2", "CGATGT"),
    bc("agilent3", "TTAGGC"),
    bc("agilent4", "TGACCA"),
    bc("agilent5", "ACAGTG"),
    bc("agilent6", "GCCAAT"),
    bc("agilent7", "CAGATC"),
    bc("agilent8", "ACTTGA"),
    bc("agilent9", "GATCAG"),
    bc("agilent10", "TAGCTT"),
    bc("agilent11", "GGCTAC"),
    bc("agilent12", "CTTGTA"),
    bc("agilent13", "AAACAT"),
    bc("agilent14", "CAAAAG"),
    bc("agilent15", "GAAACC"),
    bc("agilent16", "TAATCG"),
    bc("agilent17", "AAAGCA"),
    bc("agilent18", "CAACTA"),
    bc("agilent19", "GAATAA"),
    bc("agilent20", "TACAGC"),
    bc("agilent21", "AAATGC"),
    bc("agilent22", "CACCGG"),
    bc("agilent23", "GACGGA"),
    bc("agilent24", "AGGCCG"),
    bc("agilent25", "AACAAA"),
    bc("agilent26", "CACGAT"),
    bc("agilent27", "GATATA"),
    bc("agilent28", "TATAAT"),
    bc("agilent29", "AACCCC"),
    bc("agilent30", "CACTCA"),
    bc("agilent31", "GATGCT"),
    bc("agilent32", "TCATTC"),
    bc("agilent33", "AACTTG"),
    bc("agilent34", "CAGGCG"),
    bc("agilent35", "GCAAGG"),
    bc("agilent36", "ATAATT"),
    bc("agilent37", "AAGACT"),
    bc("agilent38", "CATGGC"),
    bc("agilent39", "GCACTT"),
    bc("agilent40", "TCCCGA"),
    bc("agilent41", "AAGCGA"),
    bc("agilent42", "CATTTT"),
    bc("agilent43", "GCCGCG"),
    bc("agilent44", "TCGAAG"),
    bc("agilent45", "AAGGAC"),
    bc("agilent46", "CCAACA"),
    bc("agilent47", "GCCTTA"),
    bc("agilent48", "ATACGG"),
    bc("agilent49", "AATAGG"),
    bc("agilent50", "CCACGC"),
    bc("agilent51", "GCTCCA"),
    bc("agilent52", "TCGGCA"),
    bc("agilent53", "ACAAAC"),
    bc("agilent54", "CCCATG"),
    bc("agilent55", "GGCACA"),
    bc("agilent56", "TCTACC"),
    bc("agilent57", "ACATCT"),
    bc("agilent58", "CCCCCT"),
    bc("agilent59", "GGCCTG"),
    bc("agilent60", "ATCCTA"),
    bc("agilent61", "ACCCAG"),
    bc("agilent62", "CCGCAA"),
    bc("agilent63", "GTAGAG"),
    bc("agilent64", "TGAATG"),
    bc("agilent65", "ACCGGC"),
    bc("agilent66", "CCTTAG"),
    bc("agilent67", "GTCCGC"),
    bc("agilent68", "TGCCAT"),
    bc("agilent69", "ACGATA"),
    bc("agilent70", "CGAGAA"),
    bc("agilent71", "GTGAAA"),
    bc("agilent72", "ATCTAT"),
    bc("agilent73", "ACTCTC"),
    bc("agilent74", "CGGAAT"),
    bc("agilent75", "GTGGCC"),
    bc("agilent76", "TGCTGG"),
    bc("agilent77", "ACTGAT"),
    bc("agilent78", "CTAGCT"),
    bc("agilent79", "GTTTCG"),
    bc("agilent80", "TGGCGC"),
    bc("agilent81", "AGAAGA"),
    bc("agilent82", "CTATAC"),
    bc("agilent83", "CGTACG"),
    bc("agilent84", "ATGAGC"),
    bc("agilent85", "AGATAG"),
    bc("agilent86", "CTCAGA"),
    bc("agilent87", "GAGTGG"),
    bc("agilent88", "TTCGAA"),
    bc("agilent89", "AGCATC"),
    bc("agilent90", "CTGCTG"),
    bc("agilent91", "GGTAGC"),
    bc("agilent92", "TTCTCC"),
    bc("agilent93", "AGCGCT"),
    bc("agilent94", "CCGTCC"),
    bc("agilent95", "ATTCCT"),
    bc("agilent96", "AGGTTT"),
];
