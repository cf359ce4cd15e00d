//! Error types for the orgstat library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for orgstat operations.
///
/// Row-level anomalies (malformed identifiers, duplicate ids, undefined
/// statistics) are absorbed by the cleaning and aggregation passes and never
/// surface here; only structural file failures do.
#[derive(Debug, Error)]
pub enum OrgStatError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for orgstat operations.
pub type Result<T> = std::result::Result<T, OrgStatError>;
