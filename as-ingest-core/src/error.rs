//! Error taxonomy for the ingest pipeline.
//!
//! One enum per pipeline stage, plus [`IngestError`] wrapping whichever stage
//! failed. Every error is terminal for the current invocation: nothing here
//! is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to locate, read or parse the TOML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing [alphasense] section in configuration file")]
    MissingSection,
    #[error("missing required keys in [alphasense] section: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Failure during the OAuth2 token exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("authentication rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed token response: {0}")]
    MalformedResponse(String),
}

/// Failure to load or parse document metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read metadata file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid metadata JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while preparing or performing the document upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("document file not found: {}", .0.display())]
    DocumentNotFound(PathBuf),
    #[error("attachment file not found: {}", .0.display())]
    AttachmentNotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upload rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed upload response: {0}")]
    MalformedResponse(String),
}

/// Umbrella error for a single-document ingest run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Upload(#[from] UploadError),
}
