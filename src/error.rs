//! Error types
//!
//! Scaling itself never fails; these cover loading documents and
//! validating command-line input.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown unit system: {0} (expected \"metric\" or \"us\")")]
    UnknownUnitSystem(String),
}

/// Result type for fallible document and argument handling
pub type ScaleResult<T> = Result<T, ScaleError>;
