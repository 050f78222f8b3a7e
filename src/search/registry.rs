//! Registry of named prefix indexes.
//!
//! The storefront keeps one index per catalog kind (products, categories,
//! vendors). The registry hands out shared handles so loaders and request
//! handlers can work on the same index without further coordination.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::data_structures::{IndexStats, SharedPrefixIndex};

/// Concurrent map from index name to shared prefix index.
#[derive(Debug, Default)]
pub struct IndexRegistry {
    indexes: DashMap<String, Arc<SharedPrefixIndex>>,
}

impl IndexRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index registered under `name`, creating it if needed.
    pub fn get_or_create(&self, name: &str) -> Arc<SharedPrefixIndex> {
        if let Some(existing) = self.indexes.get(name) {
            return Arc::clone(existing.value());
        }

        let entry = self.indexes.entry(name.to_owned()).or_insert_with(|| {
            debug!(index = name, "Creating prefix index");
            Arc::new(SharedPrefixIndex::new())
        });
        Arc::clone(entry.value())
    }

    /// Returns the index registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<SharedPrefixIndex>> {
        self.indexes.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Inserts `word` into the named index, creating the index on first use.
    pub fn insert<W: AsRef<str>>(&self, name: &str, word: W) -> bool {
        self.get_or_create(name).insert(word)
    }

    /// Queries the named index. An unknown index has no matches.
    pub fn query<P: AsRef<str>>(&self, name: &str, prefix: P) -> Vec<String> {
        match self.get(name) {
            Some(index) => index.query(prefix),
            None => Vec::new(),
        }
    }

    /// Drops the named index. Returns `true` if it existed.
    pub fn remove(&self, name: &str) -> bool {
        self.indexes.remove(name).is_some()
    }

    /// Registered index names in ascending order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.indexes.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    /// Size counters for every registered index, ordered by name.
    pub fn stats(&self) -> Vec<(String, IndexStats)> {
        let mut stats: Vec<(String, IndexStats)> = self
            .indexes
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().stats()))
            .collect();
        stats.sort_by(|a, b| a.0.cmp(&b.0));
        stats
    }

    /// Number of registered indexes.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    /// Whether no index is registered.
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}
