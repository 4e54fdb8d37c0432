#![forbid(unsafe_code)]
//! # idxsheet
//!
//! Reference catalog of short Illumina-platform **sample index** sequences
//! (TruSeq, small RNA, Agilent, Mondrian, Haloplex, Haloplex HT, SureSelect)
//! with every historical naming alias, plus the distance checks used to keep
//! the indexes sharing a sequencing lane distinguishable.
//!
//! ## Highlights
//! - 📚 **Static data**: index tables are `&'static` constants, built into a
//!   catalog once per process.
//! - 🏷️ **Aliases**: `index7`, `7`, `idx7`, `in7`, `i7` and `INDEX7` all resolve
//!   to the same barcode.
//! - 📏 **Distances**: Hamming and Levenshtein, strict or over the shortest
//!   common prefix.
//!
//! ## Examples
//! ```rust
//! // Resolve a name:
//! assert_eq!(idxsheet::lookup_name("r23").unwrap(), Some("GAGTGG"));
//! // Which catalog barcodes does an observed index match?
//! let a = idxsheet::annotate::annotate("CAGATC", idxsheet::catalog::catalog().unwrap(), 1);
//! assert!(a.buckets[0].contains(&"index7".to_string()));
//! // Are these indexes safe together in one lane?
//! let conflicts = idxsheet::lane::check_lane(&["ATCACG", "ATCATG"], 3, 2);
//! assert_eq!(conflicts.len(), 1);
//! ```

pub mod annotate;
pub mod catalog;
pub mod config;
pub mod distance;
pub mod error;
pub mod kit;
pub mod kits;
pub mod lane;
pub mod overlap;
pub mod sheet;
pub mod data {
    pub mod agilent;
    pub mod haloplex;
    pub mod haloplex_ht;
    pub mod illumina;
    pub mod mondrian;
    pub mod rpi;
    pub mod sureselect;
}

pub use error::{Error, Result};

use kit::{split_label, AliasFamily};

/// Return the static registry of kit families.
pub fn list_families() -> &'static [AliasFamily] { kits::FAMILIES }

/// Convenience: one row per family for CLI listing.
/// Each row is `(family_id, description, canonical_prefix, aliases, barcodes, length)`.
pub fn list_families_rows() -> Vec<(String, String, String, String, usize, usize)> {
    list_families()
        .iter()
        .map(|f| {
            let aliases = f.aliases.iter().map(|a| if a.is_empty() { "<none>" } else { *a }).collect::<Vec<_>>().join(",");
            (f.id.0.to_string(), f.description.to_string(), f.canonical_prefix.to_string(), aliases, f.barcodes.len(), f.barcode_len)
        })
        .collect()
}

/// Resolve any known name, alias or upper-case spelling to its sequence.
///
/// `Ok(None)` for unknown names; a catalog that cannot be built is an error.
///
/// # Examples
/// ```
/// assert_eq!(idxsheet::lookup_name("IDX7").unwrap(), Some("CAGATC"));
/// assert_eq!(idxsheet::lookup_name("index17").unwrap(), None);
/// ```
pub fn lookup_name(name: &str) -> Result<Option<&'static str>> {
    Ok(catalog::lookup()?.get(name))
}

/// The family a canonical catalog name belongs to (`"rpi23"` → small RNA).
pub fn family_of(name: &str) -> Option<&'static AliasFamily> {
    let (label, _) = split_label(name);
    kits::family_for_label(label)
}

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn family_rows_show_the_empty_alias() {
        let rows = list_families_rows();
        assert_eq!(rows.len(), 7);
        let illumina = &rows[0];
        assert_eq!(illumina.2, "index");
        assert_eq!(illumina.3, "<none>,idx,in,i");
        assert_eq!((illumina.4, illumina.5), (24, 6));
        assert_eq!(rows.iter().find(|r| r.0 == "haloplex-ht").map(|r| r.5), Some(8));
    }

    #[test]
    fn names_resolve_through_every_alias() {
        assert_eq!(lookup_name("index7").unwrap(), Some("CAGATC"));
        assert_eq!(lookup_name("INDEX7").unwrap(), Some("CAGATC"));
        assert_eq!(lookup_name("i7").unwrap(), Some("CAGATC"));
        assert_eq!(lookup_name("agilent96").unwrap(), Some("AGGTTT"));
        assert_eq!(lookup_name("nope").unwrap(), None);
    }

    #[test]
    fn family_of_uses_the_exact_label() {
        assert_eq!(family_of("haloht3").map(|f| f.id.0), Some("haloplex-ht"));
        assert_eq!(family_of("halo3").map(|f| f.id.0), Some("haloplex"));
        assert!(family_of("i7").is_none());
    }
}
