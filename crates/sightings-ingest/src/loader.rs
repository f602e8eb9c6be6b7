//! Loading the static record resource.

use std::fs;
use std::path::Path;

use serde_json::Value;
use sightings_model::{RawRecord, Sighting};
use tracing::{info, info_span};

use crate::error::{LoadError, Result};
use crate::normalize::normalize;

/// Read the JSON array of raw records at `path`.
pub fn load_raw_records(path: &Path) -> Result<Vec<RawRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_raw_records(path, &contents)?;
    info!(
        path = %path.display(),
        record_count = records.len(),
        "loaded record resource"
    );
    Ok(records)
}

/// Parse resource contents. `path` is only used for error context.
pub fn parse_raw_records(path: &Path, contents: &str) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items.into_iter().map(RawRecord::new).collect()),
        _ => Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Load and normalize the resource in one step.
pub fn load_sightings(path: &Path) -> Result<Vec<Sighting>> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let raw = load_raw_records(path)?;
    Ok(normalize(&raw)?)
}
