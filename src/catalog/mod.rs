//! Catalog ingestion.
//!
//! Reads product, category, or vendor names from disk and feeds them into
//! named prefix indexes. Two formats are understood:
//!
//! - line lists (`.txt`, `.lst`): one name per line, blank lines and comment
//!   lines (`#` alone or `# ` followed by text) are skipped;
//! - JSON (`.json`): an array of strings, or an array of listing objects
//!   carrying a string `name` field. Other fields are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, trace, warn};

use crate::config::CatalogConfig;
use crate::data_structures::SharedPrefixIndex;
use crate::error::catalog::CatalogError;
use crate::search::IndexRegistry;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// One name per line
    Lines,
    /// JSON array of names or listing objects
    Json,
}

impl CatalogFormat {
    /// Resolves the format from the file extension.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("txt" | "lst") => Ok(Self::Lines),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// A single JSON catalog entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogEntry {
    Name(String),
    Listing { name: String },
}

impl CatalogEntry {
    fn into_name(self) -> String {
        match self {
            Self::Name(name) | Self::Listing { name } => name,
        }
    }
}

/// Reads every name from a catalog file.
pub fn load_names<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<String>> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let names = match format {
        CatalogFormat::Lines => parse_lines(&contents),
        CatalogFormat::Json => parse_json(path, &contents)?,
    };

    debug!(path = %path.display(), count = names.len(), "Read catalog names");
    Ok(names)
}

/// Parses a line list.
///
/// Names that merely start with `#` (e.g. `#1 Bestseller Mug`) are kept.
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_comment(line))
        .map(str::to_owned)
        .collect()
}

fn is_comment(line: &str) -> bool {
    let is_comment = line == "#" || line.starts_with("# ");
    if is_comment {
        trace!(line, "Skipping catalog comment");
    }
    is_comment
}

/// Parses a JSON catalog. `path` is only used for error reporting.
pub fn parse_json(path: &Path, contents: &str) -> CatalogResult<Vec<String>> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(contents).map_err(|source| CatalogError::MalformedJson {
            path: path.to_path_buf(),
            source,
        })?;

    let mut names = Vec::with_capacity(entries.len());
    for (position, value) in entries.into_iter().enumerate() {
        let entry: CatalogEntry =
            serde_json::from_value(value).map_err(|_| CatalogError::InvalidEntry {
                path: path.to_path_buf(),
                position,
            })?;

        let name = entry.into_name();
        let name = name.trim();
        if !name.is_empty() {
            names.push(name.to_owned());
        }
    }

    Ok(names)
}

/// Inserts `names` into `index`, returning how many new entries were added.
pub fn populate<I>(index: &SharedPrefixIndex, names: I) -> usize
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    index.extend(names)
}

/// Loads every configured catalog source into `registry`.
///
/// Returns the total number of new entries across all indexes. Missing
/// files are skipped with a warning when `skip_missing` is set.
pub fn load_sources(registry: &IndexRegistry, config: &CatalogConfig) -> CatalogResult<usize> {
    let mut added = 0;

    for source in &config.sources {
        let names = match load_names(&source.path) {
            Ok(names) => names,
            Err(CatalogError::Read { path, source: err })
                if config.skip_missing && err.kind() == std::io::ErrorKind::NotFound =>
            {
                warn!(index = %source.index, path = %path.display(), "Catalog file missing, skipping");
                continue;
            }
            Err(e) => return Err(e),
        };

        let index = registry.get_or_create(&source.index);
        let new_entries = populate(&index, &names);
        info!(
            index = %source.index,
            path = %source.path.display(),
            read = names.len(),
            added = new_entries,
            "Loaded catalog"
        );
        added += new_entries;
    }

    Ok(added)
}

/// Convenience for callers that only need the path of a missing catalog.
pub fn missing_path(error: &CatalogError) -> Option<&PathBuf> {
    match error {
        CatalogError::Read { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
            Some(path)
        }
        _ => None,
    }
}
