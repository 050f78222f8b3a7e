//! Catalog source configuration module.
//!
//! Lists the files loaded into named indexes at startup.

use std::collections::HashSet;
use std::path::PathBuf;

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// One catalog file feeding one named index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSource {
    /// Name of the index the file populates (e.g. `products`)
    pub index: String,

    /// Path to a `.txt`/`.lst` or `.json` catalog file
    pub path: PathBuf,
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Files to load at startup
    pub sources: Vec<CatalogSource>,

    /// Whether a missing file is logged and skipped instead of failing startup
    pub skip_missing: bool,
}

impl Validate for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.index.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "catalog source index name cannot be empty".to_string(),
                ));
            }

            if source.path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "catalog source for index '{}' has an empty path",
                    source.index
                )));
            }

            // Several files may feed one index, but not the same file twice
            if !seen.insert((&source.index, &source.path)) {
                return Err(ConfigError::ValidationError(format!(
                    "catalog source {:?} listed twice for index '{}'",
                    source.path, source.index
                )));
            }
        }

        Ok(())
    }
}
