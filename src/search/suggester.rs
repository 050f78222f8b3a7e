//! Per-keystroke suggestion service.
//!
//! Wraps raw prefix queries with the display policy from
//! [`SuggestSettings`]: a minimum prefix length, case-insensitive ordering,
//! and a cap on the number of suggestions.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, instrument};

use super::IndexRegistry;
use crate::config::SuggestSettings;
use crate::data_structures::normalize;

/// Suggestion service over a shared [`IndexRegistry`].
#[derive(Debug, Clone)]
pub struct Suggester {
    registry: Arc<IndexRegistry>,
    settings: SuggestSettings,
}

impl Suggester {
    /// Creates a suggester over `registry` with the given display settings.
    pub fn new(registry: Arc<IndexRegistry>, settings: SuggestSettings) -> Self {
        Self { registry, settings }
    }

    /// Suggestions from the named index for what the user has typed so far.
    #[instrument(level = "debug", skip(self), fields(results = tracing::field::Empty))]
    pub fn suggest(&self, index: &str, typed: &str) -> Vec<String> {
        let prefix = typed.trim_start();
        if prefix.chars().count() < self.settings.min_prefix_chars {
            debug!("Prefix below minimum length");
            return Vec::new();
        }

        let mut suggestions = self.registry.query(index, prefix);

        if self.settings.sort_results {
            suggestions.sort_by(|a, b| display_order(a, b));
        }
        if let Some(max_results) = self.settings.max_results {
            suggestions.truncate(max_results);
        }

        tracing::Span::current().record("results", suggestions.len());
        suggestions
    }
}

/// Case-insensitive order, ties broken by the original text.
fn display_order(a: &str, b: &str) -> Ordering {
    normalize(a).cmp(&normalize(b)).then_with(|| a.cmp(b))
}
