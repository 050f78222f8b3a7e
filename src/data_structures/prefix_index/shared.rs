//! Lock-guarded prefix index for multi-threaded hosts.

use parking_lot::RwLock;

use super::{IndexStats, PrefixIndex};

/// A [`PrefixIndex`] behind a single reader/writer lock.
///
/// Queries share the read lock; inserts and clears take the write lock.
/// Wrap in an `Arc` to hand the same index to several request handlers.
#[derive(Debug, Default)]
pub struct SharedPrefixIndex {
    inner: RwLock<PrefixIndex>,
}

impl SharedPrefixIndex {
    /// Creates a new empty shared index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already populated index.
    pub fn from_index(index: PrefixIndex) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    /// See [`PrefixIndex::insert`].
    pub fn insert<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.write().insert(word)
    }

    /// Inserts every word while holding the write lock once.
    ///
    /// Returns how many new normalized entries were added.
    pub fn extend<I>(&self, words: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut index = self.inner.write();
        words
            .into_iter()
            .filter(|word| index.insert(word))
            .count()
    }

    /// See [`PrefixIndex::query`].
    pub fn query<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        self.inner.read().query(prefix)
    }

    /// See [`PrefixIndex::contains`].
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.read().contains(word)
    }

    /// See [`PrefixIndex::len`].
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// See [`PrefixIndex::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// See [`PrefixIndex::stats`].
    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// See [`PrefixIndex::clear`].
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
