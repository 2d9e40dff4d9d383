//! Client seams for the ingest pipeline.
//!
//! Two traits cover the remote interactions: [`Authenticator`] for the OAuth2
//! token exchange and [`Uploader`] for the multipart document upload. Both
//! are annotated for `mockall` so the pipeline can be exercised in tests
//! without a network. The concrete implementations live in [`crate::auth`]
//! and [`crate::upload`].

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::error::{AuthError, UploadError};

/// Bearer token returned by the auth endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Seconds until expiry, when the endpoint reports it.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// One document upload: the primary file, any attachments and the resolved
/// metadata object forwarded to the API as-is.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub document: PathBuf,
    pub attachments: Vec<PathBuf>,
    pub metadata: Value,
}

/// Remote acknowledgement of an accepted upload.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestReceipt {
    /// Identifier assigned by the ingestion service, when it returns one.
    #[serde(rename = "documentId", default)]
    pub document_id: Option<String>,
}

/// Trait for obtaining bearer tokens from the auth endpoint.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange the configured credentials for a bearer token (password grant).
    async fn authenticate(&self) -> Result<Token, AuthError>;

    /// Exchange a refresh token for a fresh bearer token.
    ///
    /// The single-shot CLI flow never outlives its first token and does not
    /// call this; it is part of the client's public surface for longer-lived
    /// callers.
    async fn refresh(&self, refresh_token: &str) -> Result<Token, AuthError>;
}

/// Trait for uploading one document to the ingestion API.
/// The implementor owns transport, serialisation and endpoint details.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload one document with attachments and metadata, authorised by `token`.
    async fn upload(
        &self,
        token: &Token,
        request: &UploadRequest,
    ) -> Result<IngestReceipt, UploadError>;
}
