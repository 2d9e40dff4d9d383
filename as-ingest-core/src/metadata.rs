//! Document metadata loading.
//!
//! Metadata reaches the CLI either as a path to a JSON file or as an inline
//! JSON string; both resolve to the same `serde_json::Value`. No schema is
//! enforced here: the ingestion API owns validation and unknown shapes are
//! forwarded untouched.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::MetadataError;

/// Where the metadata comes from.
#[derive(Debug, Clone)]
pub enum MetadataSource {
    /// Path to a JSON file on disk.
    File(PathBuf),
    /// A literal JSON string passed on the command line.
    Inline(String),
}

impl MetadataSource {
    /// Classify a raw `-m` argument: values ending in `.json` are file
    /// paths, anything else is treated as inline JSON.
    pub fn from_arg(arg: &str) -> MetadataSource {
        if arg.ends_with(".json") {
            MetadataSource::File(PathBuf::from(arg))
        } else {
            MetadataSource::Inline(arg.to_string())
        }
    }
}

/// Resolve an optional metadata source to the JSON value sent with the upload.
pub fn resolve(source: Option<&MetadataSource>) -> Result<Value, MetadataError> {
    match source {
        Some(MetadataSource::File(path)) => from_file(path),
        Some(MetadataSource::Inline(raw)) => {
            let value = serde_json::from_str(raw)?;
            debug!("Parsed inline metadata");
            Ok(value)
        }
        None => Ok(default_metadata()),
    }
}

fn from_file(path: &Path) -> Result<Value, MetadataError> {
    if !path.exists() {
        return Err(MetadataError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), "Parsed metadata file");
    Ok(value)
}

/// Metadata used when the caller supplies none.
pub fn default_metadata() -> Value {
    json!({
        "title": "Sample Document",
        "docAuthors": [{ "authorName": "Test Author", "operation": "ADD" }]
    })
}
