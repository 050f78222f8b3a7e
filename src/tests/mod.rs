//! Test modules for the marketplace suggestion service.
//!
//! Unit tests live next to the code they cover. This tree holds the tests
//! that cut across modules:
//! - property-based tests of the prefix index against a model
//! - configuration loading from files and the environment
//! - error display and reporting
//! - shared fixtures and strategies

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{catalog_strategy, word_strategy, TestFixture};
