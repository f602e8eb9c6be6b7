//! Error types for resource loading.

use std::path::PathBuf;

use sightings_model::MalformedRecordError;
use thiserror::Error;

/// Errors that can occur while loading the record resource.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the resource file.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not valid JSON.
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but not an array of records.
    #[error("expected a JSON array of records in {path}")]
    NotAnArray { path: PathBuf },

    /// A record failed normalization; the whole batch is rejected.
    #[error(transparent)]
    Malformed(#[from] MalformedRecordError),
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
