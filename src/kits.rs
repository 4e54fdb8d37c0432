//! Registry of kit families and the name prefixes each one answers to.
//!
//! The order of [`FAMILIES`] is the expansion order: when two families would
//! produce the same alias, the family listed later wins.
use crate::data::{agilent, haloplex, haloplex_ht, illumina, mondrian, rpi, sureselect};
use crate::kit::{AliasFamily, FamilyId};

pub const FAMILIES: &[AliasFamily] = &[
    AliasFamily {
        id: FamilyId("illumina"),
        description: "Illumina TruSeq DNA/RNA indexes 1-27 (17, 24, 26 reserved).",
        canonical_prefix: "index",
        aliases: &["", "idx", "in", "i"],
        barcode_len: 6,
        barcodes: illumina::ILLUMINA,
        provenance: illumina::PROVENANCE,
    },
    AliasFamily {
        id: FamilyId("rpi"),
        description: "Illumina TruSeq Small RNA indexes RPI1-48, reverse complemented.",
        canonical_prefix: "rpi",
        aliases: &["r", "indexr"],
        barcode_len: 6,
        barcodes: rpi::RPI,
        provenance: rpi::PROVENANCE,
    },
    AliasFamily {
        id: FamilyId("agilent"),
        description: "Agilent 96-plate indexes 1-96.",
        canonical_prefix: "agilent",
        aliases: &["a", "indexa"],
        barcode_len: 6,
        barcodes: agilent::AGILENT,
        provenance: agilent::PROVENANCE,
    },
    AliasFamily {
        id: FamilyId("mondrian"),
        description: "NuGEN Ovation SP Ultralow (Mondrian) indexes 1-16.",
        canonical_prefix: "mondrian",
        aliases: &["m", "indexm"],
        barcode_len: 6,
        barcodes: mondrian::MONDRIAN,
        provenance: mondrian::PROVENANCE,
    },
    AliasFamily {
        id: FamilyId("haloplex"),
        description: "Agilent Haloplex 6 bp indexes 1-96.",
        canonical_prefix: "halo",
        aliases: &["h", "indexh"],
        barcode_len: 6,
        barcodes: haloplex::HALOPLEX,
        provenance: haloplex::PROVENANCE,
    },
    AliasFamily {
        id: FamilyId("haloplex-ht"),
        description: "Agilent Haloplex HT 8 bp indexes 1-96.",
        canonical_prefix: "haloht",
        aliases: &["ht"],
        barcode_len: 8,
        barcodes: haloplex_ht::HALOPLEX_HT,
        provenance: haloplex_ht::PROVENANCE,
    },
    AliasFamily {
        id: FamilyId("sureselect"),
        description: "Agilent SureSelect indexes 1-16.",
        canonical_prefix: "sureselect",
        aliases: &["ss"],
        barcode_len: 6,
        barcodes: sureselect::SURESELECT,
        provenance: sureselect::PROVENANCE,
    },
];

/// Find a family by id, case-insensitively.
pub fn get_family(id: &str) -> Option<&'static AliasFamily> {
    FAMILIES.iter().find(|f| f.id.0.eq_ignore_ascii_case(id))
}

/// The family whose canonical prefix is exactly the leading label of `name`.
pub fn family_for_label(label: &str) -> Option<&'static AliasFamily> {
    FAMILIES.iter().find(|f| f.canonical_prefix == label)
}

/// The family that answers to `label` as canonical prefix or alias, ignoring case.
///
/// Searched from the last family so the answer agrees with expansion order.
pub fn family_for_alias(label: &str) -> Option<&'static AliasFamily> {
    FAMILIES.iter().rev().find(|f| f.prefixes().any(|p| p.eq_ignore_ascii_case(label)))
}

#[cfg(test)]
mod kits_tests {
    use super::*;
    use crate::kit::split_label;

    #[test]
    fn table_sizes_match_vendor_kits() {
        let sizes: Vec<(&str, usize)> = FAMILIES.iter().map(|f| (f.id.0, f.barcodes.len())).collect();
        assert_eq!(
            sizes,
            vec![
                ("illumina", 24),
                ("rpi", 48),
                ("agilent", 96),
                ("mondrian", 16),
                ("haloplex", 96),
                ("haloplex-ht", 96),
                ("sureselect", 16),
            ]
        );
    }

    #[test]
    fn every_barcode_has_family_length_and_alphabet() {
        for f in FAMILIES {
            for r in f.barcodes {
                assert_eq!(r.sequence.len(), f.barcode_len, "{} in {}", r.name, f.id);
                assert!(r.sequence.bytes().all(|b| b"ACGT".contains(&b)), "{}", r.name);
            }
        }
    }

    #[test]
    fn every_name_is_labelled_with_its_canonical_prefix() {
        for f in FAMILIES {
            for r in f.barcodes {
                let (label, digits) = split_label(r.name);
                assert_eq!(label, f.canonical_prefix);
                assert!(!digits.is_empty());
            }
        }
    }

    #[test]
    fn lookup_family_ignores_case() {
        assert_eq!(get_family("HALOPLEX-HT").map(|f| f.barcode_len), Some(8));
        assert!(family_for_label("halo").is_some());
        assert!(family_for_label("hal").is_none());
        assert_eq!(family_for_alias("").map(|f| f.id.0), Some("illumina"));
        assert_eq!(family_for_alias("INDEXR").map(|f| f.id.0), Some("rpi"));
        assert_eq!(family_for_alias("ht").map(|f| f.id.0), Some("haloplex-ht"));
    }
}
