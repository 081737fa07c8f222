use tracing::debug;

use crate::error::{Error, Result};
use crate::types::SuffixEntry;

const SEED_JSON: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../data/seed_suffixes.json"
));

/// Limits applied to suffixes added through [`SuffixRegistry::add`].
///
/// Defaults mirror the classic fixed-width table: 19 visible characters per
/// suffix and 79 per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    pub max_suffix_len: usize,
    pub max_category_len: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_suffix_len: 19,
            max_category_len: 79,
        }
    }
}

/// Ordered, append-only collection of known suffixes.
///
/// Insertion order is significant: when two matching suffixes have the same
/// length, the one inserted first wins.
#[derive(Debug, Clone, Default)]
pub struct SuffixRegistry {
    entries: Vec<SuffixEntry>,
}

impl SuffixRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the twelve canonical seed suffixes, in order.
    pub fn seeded() -> Self {
        let entries: Vec<SuffixEntry> =
            serde_json::from_slice(SEED_JSON).expect("embedded seed suffix JSON is invalid");
        debug!(count = entries.len(), "loaded seed suffixes");
        Self { entries }
    }

    /// Append an entry. Duplicates are kept.
    pub fn insert(&mut self, suffix: impl Into<String>, category: impl Into<String>) {
        let entry = SuffixEntry::new(suffix, category);
        debug!(suffix = %entry.suffix, category = %entry.category, "inserted suffix");
        self.entries.push(entry);
    }

    /// Validate, trim and append a user-supplied entry.
    pub fn add(
        &mut self,
        suffix: &str,
        category: &str,
        config: &RegistryConfig,
    ) -> Result<&SuffixEntry> {
        let suffix = suffix.trim();
        let category = category.trim();

        if suffix.is_empty() {
            return Err(Error::EmptySuffix);
        }
        if suffix.chars().any(char::is_whitespace) {
            return Err(Error::InvalidSuffix(suffix.to_string()));
        }
        let len = suffix.chars().count();
        if len > config.max_suffix_len {
            return Err(Error::SuffixTooLong {
                len,
                max: config.max_suffix_len,
            });
        }
        if category.is_empty() {
            return Err(Error::EmptyCategory);
        }
        let len = category.chars().count();
        if len > config.max_category_len {
            return Err(Error::CategoryTooLong {
                len,
                max: config.max_category_len,
            });
        }

        if self.contains(suffix) {
            debug!(suffix, "suffix already registered; keeping both entries");
        }
        self.insert(suffix, category);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Iterate over all entries in insertion order. Each call starts afresh.
    pub fn entries(&self) -> std::slice::Iter<'_, SuffixEntry> {
        self.entries.iter()
    }

    /// Check whether any entry has exactly this suffix.
    pub fn contains(&self, suffix: &str) -> bool {
        self.entries.iter().any(|e| e.suffix == suffix)
    }

    pub fn last(&self) -> Option<&SuffixEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SuffixRegistry {
    type Item = &'a SuffixEntry;
    type IntoIter = std::slice::Iter<'a, SuffixEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
