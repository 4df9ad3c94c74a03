//! Word entry data model and the deduplicating word table.

use std::collections::HashSet;

use ahash::AHashMap;

/// One candidate word extracted from the dump.
///
/// A word may carry dependencies: other words that must themselves be valid
/// for this word to be valid (e.g. a plural is only a word if its base form
/// is a word).
#[derive(Debug, Clone)]
pub struct WordEntry {
    /// The word itself; unique identity within a [`WordTable`].
    pub word: String,

    /// Words this entry's validity is conditional on.
    pub deps: HashSet<String>,

    /// True once validity has been computed. While false, `valid` must not
    /// be trusted.
    pub validated: bool,

    /// Whether the word is valid; meaningful only when `validated`.
    pub valid: bool,

    /// Transient marker set while validity resolution for this entry is on
    /// the active traversal path.
    pub in_progress: bool,
}

impl WordEntry {
    /// Create an entry with no dependencies. Such an entry is trivially
    /// valid and needs no resolution pass.
    pub fn new<S: Into<String>>(word: S) -> Self {
        WordEntry {
            word: word.into(),
            deps: HashSet::new(),
            validated: true,
            valid: true,
            in_progress: false,
        }
    }

    /// Add a dependency, demoting the entry to unvalidated.
    pub fn add_dep<S: Into<String>>(&mut self, dep: S) {
        self.deps.insert(dep.into());
        self.validated = false;
        self.valid = false;
    }
}

/// Deduplicated mapping from word to entry.
///
/// Owned exclusively by the aggregator while the table is being built, then
/// handed to the validator, then read-only.
#[derive(Debug, Default)]
pub struct WordTable {
    entries: AHashMap<String, WordEntry>,
}

impl WordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        WordTable {
            entries: AHashMap::new(),
        }
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by word.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    /// Look up an entry mutably by word.
    pub fn get_mut(&mut self, word: &str) -> Option<&mut WordEntry> {
        self.entries.get_mut(word)
    }

    /// Iterate over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    /// Iterate over all words in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Merge one observed entry into the table.
    ///
    /// If the word is already present, the incoming dependency set is
    /// unioned onto the first-seen entry and the incoming entry is
    /// discarded; otherwise the entry is inserted as-is. An entry that ends
    /// up with dependencies is demoted to unvalidated. Merging is
    /// commutative and idempotent with respect to arrival order.
    pub fn merge(&mut self, incoming: WordEntry) {
        if let Some(existing) = self.entries.get_mut(&incoming.word) {
            existing.deps.extend(incoming.deps);
            if !existing.deps.is_empty() {
                existing.validated = false;
                existing.valid = false;
            }
        } else {
            self.entries.insert(incoming.word.clone(), incoming);
        }
    }
}
