//! Error types for loading API descriptions.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::HttpVerb;

/// Errors that can occur while loading or parsing an API description.
#[derive(Debug, Error)]
pub enum DefineError {
    /// The description file does not exist.
    #[error("API description not found: {}", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The description file exists but could not be read.
    #[error("Failed to read API description '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported API description format '{extension}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat { extension: String },

    /// The document is not valid YAML.
    #[error("Failed to parse YAML description: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON.
    #[error("Failed to parse JSON description: {0}")]
    Json(#[from] serde_json::Error),

    /// An operation record has an unexpected shape.
    #[error("Invalid operation {verb} {path}: {source}")]
    InvalidOperation {
        verb: HttpVerb,
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
