//! Single-document ingest pipeline: authenticate, resolve metadata, upload.
//!
//! The flow is strictly linear and fail-fast: any stage error terminates the
//! run and is surfaced as an [`IngestError`]. The pipeline is generic over
//! [`Authenticator`] and [`Uploader`] so tests can inject mocks.
//!
//! Local path checks run before any network traffic, so a missing document
//! never costs a token request.

use std::path::PathBuf;
use tracing::{error, info};

use crate::contract::{Authenticator, UploadRequest, Uploader};
use crate::error::{IngestError, UploadError};
use crate::metadata::{self, MetadataSource};

/// Terminal summary of one ingest run.
#[derive(Debug)]
pub struct IngestReport {
    /// File name of the uploaded document.
    pub document: String,
    /// Identifier assigned by the ingestion service, when it returned one.
    pub document_id: Option<String>,
}

/// Run the full pipeline for one document.
pub async fn ingest<A, U>(
    authenticator: &A,
    uploader: &U,
    document: PathBuf,
    attachments: Vec<PathBuf>,
    metadata_source: Option<MetadataSource>,
) -> Result<IngestReport, IngestError>
where
    A: Authenticator,
    U: Uploader,
{
    if !document.exists() {
        error!(document = %document.display(), "Document does not exist");
        return Err(UploadError::DocumentNotFound(document).into());
    }
    for attachment in &attachments {
        if !attachment.exists() {
            error!(attachment = %attachment.display(), "Attachment does not exist");
            return Err(UploadError::AttachmentNotFound(attachment.clone()).into());
        }
    }

    info!("Authenticating");
    let token = authenticator.authenticate().await?;

    info!("Loading metadata");
    let metadata = metadata::resolve(metadata_source.as_ref())?;

    let request = UploadRequest {
        document,
        attachments,
        metadata,
    };
    info!(document = %request.document.display(), "Uploading");
    let receipt = uploader.upload(&token, &request).await?;

    let document_name = request
        .document
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| request.document.display().to_string());
    Ok(IngestReport {
        document: document_name,
        document_id: receipt.document_id,
    })
}
