//! Search-suggestion surface built on the prefix index.

pub mod registry;
pub mod suggester;

pub use registry::IndexRegistry;
pub use suggester::Suggester;
