//! Node implementation for the prefix index.
//!
//! Each node stands for one character position among the indexed strings.
//! Nodes own their children exclusively, so the whole index is a plain tree.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child table keyed by the next (lowercased) character.
pub(crate) type ChildMap = HashMap<char, IndexNode, FnvBuildHasher>;

/// A node in the prefix index.
///
/// A node is a terminus when `original` is set; the stored string is the
/// exact value most recently inserted for the normalized path leading here.
#[derive(Debug, Default)]
pub struct IndexNode {
    /// Map of characters to child nodes
    pub(crate) children: ChildMap,

    /// Original (non-normalized) string ending at this node, if any
    pub(crate) original: Option<String>,
}

impl IndexNode {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// The original string stored at this node, if it is a terminus.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// Returns the child for `c`, if one exists.
    pub fn child(&self, c: char) -> Option<&IndexNode> {
        self.children.get(&c)
    }
}
