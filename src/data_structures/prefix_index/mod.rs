//! Prefix Index Implementation
//!
//! A case-insensitive trie over catalog names answering "which names start
//! with this prefix" in time proportional to the prefix length plus the
//! number of matches, independent of how many names are indexed.
//!
//! Keys are normalized to lowercase; the original spelling of each name is
//! kept at its terminus node for display. Inserting two spellings that
//! normalize to the same key keeps the most recent one.
//!
//! # Example
//!
//! ```
//! use marketplace_suggest_lib::data_structures::PrefixIndex;
//!
//! let mut index = PrefixIndex::new();
//! index.insert("Apple");
//! index.insert("Apricot");
//! index.insert("Banana");
//!
//! let mut matches = index.query("aP");
//! matches.sort();
//! assert_eq!(matches, vec!["Apple", "Apricot"]);
//! assert!(index.query("xyz").is_empty());
//! ```

mod node;
mod shared;

use std::borrow::Cow;

use serde::Serialize;

pub use node::IndexNode;
pub use shared::SharedPrefixIndex;

/// Returns the normalized (lowercase) form used as the indexing key.
///
/// Characters are lowercased one at a time and the Greek final sigma `ς` is
/// folded to `σ`, so the normalized form of a prefix is always a prefix of
/// the normalized form of the full string, whatever the input casing.
/// Borrows the input when it is already normalized.
pub fn normalize(s: &str) -> Cow<'_, str> {
    let already_normalized = s.chars().all(|c| {
        let mut folded = fold_char(c);
        folded.next() == Some(c) && folded.next().is_none()
    });

    if already_normalized {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(normalized_chars(s).collect())
    }
}

/// Normalized characters of `s`, in order.
fn normalized_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(fold_char)
}

/// Lowercase mapping of one character; `ς` and `σ` share one key.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase()
        .map(|lower| if lower == 'ς' { 'σ' } else { lower })
}

/// Size counters for a [`PrefixIndex`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Number of distinct normalized entries
    pub entries: usize,

    /// Number of nodes below the root
    pub nodes: usize,
}

/// In-memory prefix index over a set of strings.
///
/// Key features:
/// * Case-insensitive insertion and lookup
/// * Original casing preserved for display, last write wins
/// * Infallible operations: every string, including the empty one, is valid
/// * Fully materialized query results
///
/// The index is single-owner; share it across threads through
/// [`SharedPrefixIndex`].
#[derive(Debug, Default)]
pub struct PrefixIndex {
    /// The sentinel root node
    root: IndexNode,

    /// Distinct normalized entries currently indexed
    entries: usize,

    /// Nodes allocated below the root
    nodes: usize,
}

impl PrefixIndex {
    /// Creates a new empty `PrefixIndex`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a string into the index.
    ///
    /// The string is indexed under its lowercase form and stored verbatim at
    /// the terminus, replacing any earlier spelling of the same form.
    ///
    /// # Returns
    ///
    /// `true` if the normalized form was not indexed before, `false` if an
    /// existing entry was overwritten.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();

        let mut created = 0;
        let mut node = &mut self.root;
        for c in normalized_chars(word) {
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                IndexNode::new()
            });
        }

        let is_new = node.original.replace(word.to_owned()).is_none();

        self.nodes += created;
        if is_new {
            self.entries += 1;
        }

        is_new
    }

    /// Returns the original spelling of every indexed string starting with
    /// `prefix`, compared case-insensitively.
    ///
    /// Returns an empty vector as soon as the prefix leaves the tree. An empty
    /// prefix returns every indexed string. Result order is unspecified.
    pub fn query<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let Some(start) = self.descend(prefix.as_ref()) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        collect_originals(start, &mut results);
        results
    }

    /// Checks whether `word` (after normalization) is indexed exactly.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.get(word).is_some()
    }

    /// Returns the stored original for the exact normalized form of `word`.
    pub fn get<W>(&self, word: W) -> Option<&str>
    where
        W: AsRef<str>,
    {
        self.descend(word.as_ref()).and_then(IndexNode::original)
    }

    /// Number of distinct normalized entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Current size counters.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.entries,
            nodes: self.nodes,
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Walks the path spelled by the normalized form of `key`.
    fn descend(&self, key: &str) -> Option<&IndexNode> {
        normalized_chars(key).try_fold(&self.root, |node, c| node.child(c))
    }
}

/// Collects the original of every terminus in the subtree rooted at `start`.
///
/// Uses an explicit stack so deep entries never grow the call stack.
fn collect_originals(start: &IndexNode, results: &mut Vec<String>) {
    let mut pending = vec![start];
    while let Some(node) = pending.pop() {
        if let Some(original) = node.original() {
            results.push(original.to_owned());
        }
        pending.extend(node.children.values());
    }
}

impl Drop for PrefixIndex {
    // Tear the tree down iteratively; the derived drop would recurse once per character.
    fn drop(&mut self) {
        let mut pending: Vec<IndexNode> = self.root.children.drain().map(|(_, node)| node).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<S> Extend<S> for PrefixIndex
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for PrefixIndex
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
