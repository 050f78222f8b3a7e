//! Catalog error module.
//!
//! Errors raised while reading catalog name lists from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a known catalog format.
    #[error("Unsupported catalog format for {0}")]
    UnsupportedFormat(PathBuf),

    /// The catalog file is not valid JSON.
    #[error("Malformed JSON catalog {path}: {source}")]
    MalformedJson {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A JSON entry is neither a string nor an object with a string `name`.
    #[error("Invalid entry #{position} in catalog {path}")]
    InvalidEntry {
        /// Path of the catalog file
        path: PathBuf,
        /// Zero-based position of the entry in the array
        position: usize,
    },
}
