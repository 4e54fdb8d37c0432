//! Haloplex HT indexes `haloht1`–`haloht96`, the 8 bp successor set.

use crate::kit::{bc, BarcodeRecord, Provenance};

pub const PROVENANCE: Provenance = Provenance {
    source: "oligo_reference-halo8.csv",
    reference: "8 bp index column",
    notes: "The only 8 bp family in the catalog.",
};

/// Haloplex HT 8 bp indexes.
pub const HALOPLEX_HT: &[BarcodeRecord] = &[
    bc("haloht1", "AACGTGAT"),
    bc("haloht2", "AAACATCG"),
    bc("haloht3", "ATGCCTAA"),
    bc("haloht4", "AGTGGTCA"),
    bc("haloht5", "ACCACTGT"),
    bc("haloht6", "ACATTGGC"),
    bc("haloht7", "CAGATCTG"),
    bc("haloht8", "CATCAAGT"),
    bc("haloht9", "CGCTGATC"),
    bc("haloht10", "ACAAGCTA"),
    bc("haloht11", "CTGTAGCC"),
    bc("haloht12", "AGTACAAG"),
    bc("haloht13", "AACAACCA"),
    bc("haloht14", "AACCGAGA"),
    bc("haloht15", "AACGCTTA"),
    bc("haloht16", "AAGACGGA"),
    bc("haloht17", "AAGGTACA"),
    bc("haloht18", "ACACAGAA"),
    bc("haloht19", "ACAGCAGA"),
    bc("haloht20", "ACCTCCAA"),
    bc("haloht21", "ACGCTCGA"),
    bc("haloht22", "ACGTATCA"),
    bc("haloht23", "ACTATGCA"),
    bc("haloht24", "AGAGTCAA"),
    bc("haloht25", "AGATCGCA"),
    bc("haloht26", "AGCAGGAA"),
    bc("haloht27", "AGTCACTA"),
    bc("haloht28", "ATCCTGTA"),
    bc("haloht29", "ATTGAGGA"),
    bc("haloht30", "CAACCACA"),
    bc("haloht31", "CAAGACTA"),
    bc("haloht32", "CAATGGAA"),
    bc("haloht33", "CACTTCGA"),
    bc("haloht34", "CAGCGTTA"),
    bc("haloht35", "CATACCAA"),
    bc("haloht36", "CCAGTTCA"),
    bc("haloht37", "CCGAAGTA"),
    bc("haloht38", "CCGTGAGA"),
    bc("haloht39", "CCTCCTGA"),
    bc("haloht40", "CGAACTTA"),
    bc("haloht41", "CGACTGGA"),
    bc("haloht42", "CGCATACA"),
    bc("haloht43", "CTCAATGA"),
    bc("haloht44", "CTGAGCCA"),
    bc("haloht45", "CTGGCATA"),
    bc("haloht46", "GAATCTGA"),
    bc("haloht47", "GACTAGTA"),
    bc("haloht48", "GAGCTGAA"),
    bc("haloht49", "GATAGACA"),
    bc("haloht50", "GCCACATA"),
    bc("haloht51", "GCGAGTAA"),
    bc("haloht52", "GCTAACGA"),
    bc("haloht53", "GCTCGGTA"),
    bc("haloht54", "GGAGAACA"),
    bc("haloht55", "GGTGCGAA"),
    bc("haloht56", "GTACGCAA"),
    bc("haloht57", "GTCGTAGA"),
    bc("haloht58", "GTCTGTCA"),
    bc("haloht59", "GTGTTCTA"),
    bc("haloht60", "TAGGATGA"),
    bc("haloht61", "TATCAGCA"),
    bc("haloht62", "TCCGTCTA"),
    bc("haloht63", "TCTTCACA"),
    bc("haloht64", "TGAAGAGA"),
    bc("haloht65", "TGGAACAA"),
    bc("haloht66", "TGGCTTCA"),
    bc("haloht67", "TGGTGGTA"),
    bc("haloht68", "TTCACGCA"),
    bc("haloht69", "AACTCACC"),
    bc("haloht70", "AAGAGATC"),
    bc("haloht71", "AAGGACAC"),
    bc("haloht72", "AATCCGTC"),
    bc("haloht73", "AATGTTGC"),
    bc("haloht74", "ACACGACC"),
    bc("haloht75", "ACAGATTC"),
    bc("haloht76", "AGATGTAC"),
    bc("haloht77", "AGCACCTC"),
    bc("haloht78", "AGCCATGC"),
    bc("haloht79", "AGGCTAAC"),
    bc("haloht80", "ATAGCGAC"),
    bc("haloht81", "ATCATTCC"),
    bc("haloht82", "ATTGGCTC"),
    bc("haloht83", "CAAGGAGC"),
    bc("haloht84", "CACCTTAC"),
    bc("haloht85", "CCATCCTC"),
    bc("haloht86", "CCGACAAC"),
    bc("haloht87", "CCTAATCC"),
    bc("haloht88", "CCTCTATC"),
    bc("haloht89", "CGACACAC"),
    bc("haloht90", "CGGATTGC"),
    bc("haloht91", "CTAAGGTC"),
    bc("haloht92", "GAACAGGC"),
    bc("haloht93", "GACAGTGC"),
    bc("haloht94", "GAGTTAGC"),
    bc("haloht95", "GATGAATC"),
    bc("haloht96", "GCCAAGAC"),
];
