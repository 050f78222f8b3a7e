//! Marketplace Suggest Library
//!
//! Case-insensitive "starts-with" search suggestions for the marketplace
//! storefront. The library holds the prefix index, a registry of named
//! indexes (products, categories, vendors), catalog loaders that populate
//! them, and the suggestion service that shapes results for display.
//!
//! # Architecture
//!
//! - [`data_structures`]: the prefix index and its lock-guarded variant
//! - [`search`]: index registry and suggestion service
//! - [`catalog`]: catalog file ingestion
//! - [`config`]: layered configuration
//! - [`error`]: error types and reporting

pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod search;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the suggestion service.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
