// crates/ssm-env-core/src/core/map.rs
// ============================================================================
// Module: Parameter Map
// Description: Formatted-name to value mapping produced by collection.
// Purpose: Hold per-path and merged results with deterministic iteration.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`ParameterMap`] maps formatted names to trimmed values. It is backed by a
//! `BTreeMap` so exports iterate in a stable order regardless of how the map
//! was built.
//! Invariants:
//! - Keys are formatted names, never raw hierarchical paths.
//! - Inserting an existing key overwrites the previous value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Parameter Map
// ============================================================================

/// Mapping from formatted parameter names to trimmed values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap {
    /// Entries keyed by formatted name.
    entries: BTreeMap<String, String>,
}

impl ParameterMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts a value, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Returns the value stored for a formatted name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns true when the formatted name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterates formatted names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Overwrites entries in `self` with every entry from `other`.
    ///
    /// On key collision the value from `other` wins.
    pub fn absorb(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

impl std::fmt::Debug for ParameterMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Values may be secrets; only names are shown.
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl IntoIterator for ParameterMap {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
        }
    }
}
