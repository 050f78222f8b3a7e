//! Suggestion display configuration module.
//!
//! Controls how raw prefix matches are shaped before they are shown in the
//! storefront search box.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_results`.
const MAX_RESULTS_LIMIT: usize = 10_000;

/// Suggestion display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SuggestSettings {
    /// Minimum number of typed characters before suggestions are returned
    pub min_prefix_chars: usize,

    /// Maximum number of suggestions returned (None for no cap)
    pub max_results: Option<usize>,

    /// Whether to sort suggestions case-insensitively
    pub sort_results: bool,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            min_prefix_chars: 0,
            max_results: None,
            sort_results: true,
        }
    }
}

impl SuggestSettings {
    /// Set the minimum prefix length.
    pub fn with_min_prefix_chars(mut self, min_prefix_chars: usize) -> Self {
        self.min_prefix_chars = min_prefix_chars;
        self
    }

    /// Cap the number of suggestions.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Enable or disable sorting.
    pub fn with_sort_results(mut self, sort_results: bool) -> Self {
        self.sort_results = sort_results;
        self
    }
}

impl Validate for SuggestSettings {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(max_results) = self.max_results {
            if max_results == 0 || max_results > MAX_RESULTS_LIMIT {
                return Err(ConfigError::ValueOutOfRange {
                    key: "suggest.max_results".to_string(),
                    message: format!("must be between 1 and {MAX_RESULTS_LIMIT}"),
                });
            }
        }

        Ok(())
    }
}
