//! The barcode **catalog** (one entry per physical barcode) and the
//! **expanded lookup** (every alias and upper-case spelling of every name).
//!
//! Both are built from [`crate::kits::FAMILIES`] once per process and are
//! read-only afterwards; see [`catalog`] and [`lookup`].
//!
//! # Examples
//! ```
//! let lookup = idxsheet::catalog::lookup().unwrap();
//! assert_eq!(lookup.get("INDEX7"), Some("CAGATC"));
//! assert_eq!(lookup.get("i7"), Some("CAGATC"));
//! assert_eq!(lookup.get("ht1"), Some("AACGTGAT"));
//! ```
use std::collections::btree_map::{BTreeMap, Entry};
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::kit::{split_label, AliasFamily};
use crate::kits::FAMILIES;

/// Canonical name → sequence, no aliases.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn get(&self, name: &str) -> Option<&str> { self.entries.get(name).map(String::as_str) }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn contains(&self, name: &str) -> bool { self.entries.contains_key(name) }

    /// `(name, sequence)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An alias that replaced an earlier key holding a different sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AliasCollision {
    pub name: String,
    pub previous: String,
    pub winner: String,
}

/// Expanded name → sequence: canonical names, alias-prefixed names and upper-case keys.
#[derive(Clone, Debug, Default)]
pub struct ExpandedLookup {
    entries: BTreeMap<String, String>,
    collisions: Vec<AliasCollision>,
}

impl ExpandedLookup {
    pub fn get(&self, name: &str) -> Option<&str> { self.entries.get(name).map(String::as_str) }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn contains(&self, name: &str) -> bool { self.entries.contains_key(name) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ { self.entries.keys().map(String::as_str) }

    /// Overwrites seen while expanding, in the order they happened.
    ///
    /// Later families win, so an entry here names the sequence that was kept.
    pub fn collisions(&self) -> &[AliasCollision] { &self.collisions }

    fn insert(&mut self, name: String, sequence: &str) {
        match self.entries.entry(name) {
            Entry::Vacant(v) => {
                v.insert(sequence.to_string());
            }
            Entry::Occupied(mut o) => {
                if o.get() != sequence {
                    warn!(key = o.key().as_str(), previous = o.get().as_str(), winner = sequence, "alias overwrites an existing name");
                    self.collisions.push(AliasCollision {
                        name: o.key().clone(),
                        previous: o.get().clone(),
                        winner: sequence.to_string(),
                    });
                    o.insert(sequence.to_string());
                }
            }
        }
    }
}

/// Merge the index tables of `families` into one [`Catalog`].
///
/// The same name may appear twice only with the same sequence.
pub fn build_catalog(families: &[AliasFamily]) -> Result<Catalog> {
    let mut entries: BTreeMap<String, String> = BTreeMap::new();
    for family in families {
        for record in family.barcodes {
            match entries.entry(record.name.to_string()) {
                Entry::Vacant(v) => {
                    v.insert(record.sequence.to_string());
                }
                Entry::Occupied(o) if o.get() == record.sequence => {}
                Entry::Occupied(o) => {
                    return Err(Error::DuplicateName {
                        name: o.key().clone(),
                        first: o.get().clone(),
                        second: record.sequence.to_string(),
                    });
                }
            }
        }
    }
    debug!(families = families.len(), barcodes = entries.len(), "catalog built");
    Ok(Catalog { entries })
}

/// Expand `entries` with every family's alias prefixes, then add an upper-case
/// key for every resulting key.
///
/// An entry belongs to a family when its leading label equals the family's
/// canonical prefix exactly; its number is kept verbatim under each alias.
/// Entries claimed by no family are carried over unchanged, before any family
/// expansion. Later writes win on collisions and are recorded in
/// [`ExpandedLookup::collisions`].
///
/// Expanding an already expanded table adds nothing new: aliases and upper-case
/// keys never carry a canonical label in lower case.
pub fn expand<'a, I>(entries: I, families: &[AliasFamily]) -> ExpandedLookup
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut claimed: Vec<Vec<(&'a str, &'a str)>> = vec![Vec::new(); families.len()];
    let mut out = ExpandedLookup::default();
    for (name, sequence) in entries {
        let (label, _) = split_label(name);
        match families.iter().position(|f| f.canonical_prefix == label) {
            Some(i) => claimed[i].push((name, sequence)),
            None => out.insert(name.to_string(), sequence),
        }
    }
    for (family, members) in families.iter().zip(&claimed) {
        for (name, sequence) in members {
            let (_, suffix) = split_label(name);
            for alias in family.alias_names(suffix) {
                out.insert(alias, sequence);
            }
        }
    }
    let upper: Vec<(String, String)> = out
        .entries
        .iter()
        .map(|(k, v)| (k.to_ascii_uppercase(), v.clone()))
        .collect();
    for (k, v) in upper {
        out.insert(k, &v);
    }
    debug!(keys = out.len(), collisions = out.collisions.len(), "lookup expanded");
    out
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();
static LOOKUP: OnceLock<ExpandedLookup> = OnceLock::new();

/// The process-wide catalog built from [`FAMILIES`].
pub fn catalog() -> Result<&'static Catalog> {
    if let Some(c) = CATALOG.get() {
        return Ok(c);
    }
    let built = build_catalog(FAMILIES)?;
    Ok(CATALOG.get_or_init(|| built))
}

/// The process-wide expanded lookup built from [`catalog`].
pub fn lookup() -> Result<&'static ExpandedLookup> {
    if let Some(l) = LOOKUP.get() {
        return Ok(l);
    }
    let expanded = expand(catalog()?.iter(), FAMILIES);
    Ok(LOOKUP.get_or_init(|| expanded))
}
