//! Haloplex indexes `halo1`–`halo96`.
//!
//! Source: "Haloplex PCR Target Enrichment & Library Preparation Guide",
//! version 2.0, November 2011.

use crate::kit::{bc, BarcodeRecord, Provenance};

pub const PROVENANCE: Provenance = Provenance {
    source: "Haloplex PCR Target Enrichment & Library Preparation Guide v2.0 (Nov 2011)",
    reference: "index primer table",
    notes: "",
};

/// Haloplex 6 bp indexes.
pub const HALOPLEX: &[BarcodeRecord] = &[
    bc("halo1", "CTCGGT"),
    bc("halo2", "AATCGT"),
    bc("halo3", "GCGCGT"),
    bc("halo4", "CGAAGT"),
    bc("halo5", "TATTCT"),
    bc("halo6", "AGATCT"),
    bc("halo7", "CAGGCT"),
    bc("halo8", "TCCGCT"),
    bc("halo9", "GGTCCT"),
    bc("halo10", "TCGTAT"),
    bc("halo11", "GTCCAT"),
    bc("halo12", "GATTGG"),
    bc("halo13", "TTACGG"),
    bc("halo14", "CCTTCG"),
    bc("halo15", "GGAGCG"),
    bc("halo16", "ACGCAG"),
    bc("halo17", "TGCCAG"),
    bc("halo18", "GAGAAG"),
    bc("halo19", "ATCAAG"),
    bc("halo20", "CGATTC"),
    bc("halo21", "ACCGTC"),
    bc("halo22", "TAAGTC"),
    bc("halo23", "TTCATC"),
    bc("halo24", "AGCAGC"),
    bc("halo25", "GCGTCC"),
    bc("halo26", "AGGTAC"),
    bc("halo27", "ACGTTA"),
    bc("halo28", "AACCTA"),
    bc("halo29", "TGGATA"),
    bc("halo30", "TTATCA"),
    bc("halo31", "ATAGAA"),
    bc("halo32", "CTGGTT"),
    bc("halo33", "GGAGTT"),
    bc("halo34", "TACCTT"),
    bc("halo35", "TCTACT"),
    bc("halo36", "ATAACT"),
    bc("halo37", "GAGTAT"),
    bc("halo38", "AGCTAT"),
    bc("halo39", "CAAGAT"),
    bc("halo40", "TCGTTG"),
    bc("halo41", "ACTCTG"),
    bc("halo42", "GATATG"),
    bc("halo43", "TATGCG"),
    bc("halo44", "GTACCG"),
    bc("halo45", "CAGACG"),
    bc("halo46", "CCTGAG"),
    bc("halo47", "TATTGC"),
    bc("halo48", "GAGAGC"),
    bc("halo49", "ATATAC"),
    bc("halo50", "GCCGAC"),
    bc("halo51", "CTTAAC"),
    bc("halo52", "GTTCTA"),
    bc("halo53", "CAGCTA"),
    bc("halo54", "ACCGGA"),
    bc("halo55", "CTCCGA"),
    bc("halo56", "TTAAGA"),
    bc("halo57", "GGTTCA"),
    bc("halo58", "ACGCCA"),
    bc("halo59", "CGACCA"),
    bc("halo60", "TCGGAA"),
    bc("halo61", "GGCCTT"),
    bc("halo62", "AGACGT"),
    bc("halo63", "CATAGT"),
    bc("halo64", "GATGAT"),
    bc("halo65", "CCTATG"),
    bc("halo66", "AACTGG"),
    bc("halo67", "GCGAGG"),
    bc("halo68", "TTCTCG"),
    bc("halo69", "GCTGCG"),
    bc("halo70", "CTGGCG"),
    bc("halo71", "CGAACG"),
    bc("halo72", "ATTCAG"),
    bc("halo73", "CCGTTC"),
    bc("halo74", "TACTTC"),
    bc("halo75", "GAGGTC"),
    bc("halo76", "ATCCTC"),
    bc("halo77", "TCAATC"),
    bc("halo78", "CTTCGC"),
    bc("halo79", "GACCGC"),
    bc("halo80", "ATAAGC"),
    bc("halo81", "CATTAC"),
    bc("halo82", "TGATAC"),
    bc("halo83", "CTAGAC"),
    bc("halo84", "TAGAAC"),
    bc("halo85", "ATGGTA"),
    bc("halo86", "GTACGA"),
    bc("halo87", "AAGAGA"),
    bc("halo88", "GGCAGA"),
    bc("halo89", "GGAGAA"),
    bc("halo90", "GCGCAA"),
    bc("halo91", "GCGGTT"),
    bc("halo92", "TTAGTT"),
    bc("halo93", "AGAATT"),
    bc("halo94", "ATCAGT"),
    bc("halo95", "GGCGCT"),
    bc("halo96", "ACTTAT"),
];
