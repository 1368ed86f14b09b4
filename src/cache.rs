//! Ordered CMake cache container
//!
//! Holds one entry per variable name, in first-insertion order. Re-setting
//! an existing name replaces the value but keeps the entry's original slot,
//! matching how an ordered map updates in place. Removal shifts the
//! remaining entries so iteration order is never disturbed.

use crate::entry::CacheEntry;
use crate::error::{CacheError, CacheResult};
use crate::value::Value;
use crate::value_type::ValueType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An ordered set of uniquely named cache entries
///
/// Serializes to the `-DNAME[:TYPE]=VALUE` arguments CMake consumes, one
/// per entry, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cache {
    entries: IndexMap<String, CacheEntry>,
}

impl Cache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when an entry with the given name exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the entry for the given name, if present
    pub fn get(&self, name: &str) -> Option<&CacheEntry> {
        self.entries.get(name)
    }

    /// Define an untyped cache entry, replacing any existing entry with the
    /// same name in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> CacheResult<()> {
        self.insert(CacheEntry::new(name, value)?);
        Ok(())
    }

    /// Define a typed cache entry, replacing any existing entry with the
    /// same name in place
    pub fn set_typed(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        value_type: ValueType,
    ) -> CacheResult<()> {
        self.insert(CacheEntry::typed(name, value, value_type)?);
        Ok(())
    }

    /// Store a prebuilt entry under its own name
    ///
    /// An existing entry with the same name is replaced but keeps its
    /// original insertion slot.
    pub fn insert(&mut self, entry: CacheEntry) {
        debug!(entry = %entry, "set cache entry");
        self.entries.insert(entry.name().to_string(), entry);
    }

    /// Remove and return an entry
    ///
    /// Fails with [`CacheError::EntryNotFound`] when no entry with the name
    /// exists. The remaining entries keep their relative order.
    pub fn unset(&mut self, name: &str) -> CacheResult<CacheEntry> {
        debug!(name, "unset cache entry");
        self.entries
            .shift_remove(name)
            .ok_or_else(|| CacheError::EntryNotFound(name.to_string()))
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in the order they were first set
    pub fn entries(&self) -> impl Iterator<Item = &CacheEntry> {
        self.entries.values()
    }

    /// Entries formatted as CMake command-line arguments, in order
    pub fn args(&self) -> Vec<String> {
        self.entries().map(|entry| format!("-D{}", entry)).collect()
    }

    /// Apply another cache's entries on top of this one
    ///
    /// Names present in both take `other`'s value while keeping their slot
    /// here; new names are appended in `other`'s order.
    pub fn merge_into(&mut self, other: &Self) {
        debug!(count = other.len(), "merging cache entries");
        for entry in other.entries() {
            self.insert(entry.clone());
        }
    }

    /// Combine two caches into a new one, `other` taking precedence by name
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.merge_into(other);
        merged
    }
}

impl<'a> IntoIterator for &'a Cache {
    type Item = &'a CacheEntry;
    type IntoIter = indexmap::map::Values<'a, String, CacheEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<CacheEntry> for Cache {
    fn from_iter<I: IntoIterator<Item = CacheEntry>>(iter: I) -> Self {
        let mut cache = Self::new();
        for entry in iter {
            cache.insert(entry);
        }
        cache
    }
}
