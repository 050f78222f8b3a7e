//! Data structures for the marketplace suggestion service.
//!
//! The prefix index is a plain single-owner tree; the shared variant adds
//! one reader/writer lock for hosts that query from several threads.

pub mod prefix_index;

// Re-export common data structures
pub use prefix_index::{normalize, IndexNode, IndexStats, PrefixIndex, SharedPrefixIndex};
