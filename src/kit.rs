//! Core types for **barcode families**, **barcode records** and **provenance**.
//!
//! This module holds the data model used across the crate. Everything here is
//! `&'static` so that the kit tables live in the binary as constants.
//!
//! # Provenance
//! Every [`AliasFamily`] carries a [`Provenance`] entry that records where its
//! index table was transcribed from (vendor guide, spreadsheet, CSV file).
use core::fmt;

/// Canonical identifier for a kit family (e.g. `"illumina"`, `"haloplex-ht"`).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FamilyId(pub &'static str);

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Where an index table came from.
#[derive(Clone, Debug)]
pub struct Provenance {
    /// Human-readable source (document or file name).
    pub source: &'static str,
    /// Table, section or file reference within the source.
    pub reference: &'static str,
    /// Any helpful notes (reserved numbers, reverse-complement conversion, ...).
    pub notes: &'static str,
}

/// A single named barcode: the `BarcodeEntry` of the catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BarcodeRecord {
    /// Canonical name, always `<canonical prefix><number>` (e.g. `"index7"`).
    pub name: &'static str,
    /// Uppercase nucleotide string over `{A,C,G,T}`.
    pub sequence: &'static str,
}

/// Shorthand used by the data tables.
pub(crate) const fn bc(name: &'static str, sequence: &'static str) -> BarcodeRecord {
    BarcodeRecord { name, sequence }
}

/// A kit family: one index table plus the name prefixes that all resolve to it.
///
/// Alias expansion is prefix substitution on the leading label of a name: with
/// canonical prefix `"index"` and alias `"i"`, `"index7"` also becomes `"i7"`.
#[derive(Clone, Debug)]
pub struct AliasFamily {
    /// Identifier such as `"illumina"` or `"rpi"`.
    pub id: FamilyId,
    /// One-line description of the kit.
    pub description: &'static str,
    /// The label every canonical name in [`AliasFamily::barcodes`] starts with.
    pub canonical_prefix: &'static str,
    /// Additional prefixes accepted for this family. May contain `""`.
    pub aliases: &'static [&'static str],
    /// Fixed sequence length shared by every barcode of the family.
    pub barcode_len: usize,
    /// The index table, in ascending number order.
    pub barcodes: &'static [BarcodeRecord],
    /// Source information for auditability.
    pub provenance: Provenance,
}

impl AliasFamily {
    /// The canonical prefix followed by every alias, in expansion order.
    pub fn prefixes(&self) -> impl Iterator<Item = &'static str> + '_ {
        core::iter::once(self.canonical_prefix).chain(self.aliases.iter().copied())
    }

    /// Rename `suffix` under every prefix of the family.
    pub fn alias_names<'a>(&'a self, suffix: &'a str) -> impl Iterator<Item = String> + 'a {
        self.prefixes().map(move |p| format!("{p}{suffix}"))
    }
}

/// Split a name into its leading label and trailing number (`"rpi23"` → `("rpi", "23")`).
///
/// A name without trailing digits is all label; a name of only digits has an empty label.
pub fn split_label(name: &str) -> (&str, &str) {
    let cut = name
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(name.len());
    name.split_at(cut)
}

/// Sort key that orders `"index2"` before `"index10"`.
///
/// Names without a numeric suffix sort after the numbered names sharing their label.
pub fn natural_key(name: &str) -> (&str, u64) {
    let (label, digits) = split_label(name);
    (label, digits.parse().unwrap_or(u64::MAX))
}
