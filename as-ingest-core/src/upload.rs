//! Multipart document upload against the AlphaSense ingestion API.
//!
//! The request carries the primary document as part `file`, each attachment
//! as a part named `attachments`, and the metadata JSON as a text part named
//! `metadata`, authorised by a bearer token. One attempt per call.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::contract::{IngestReceipt, Token, UploadRequest, Uploader};
use crate::error::UploadError;

/// Upload endpoint path appended to the configured ingestion base URL.
const UPLOAD_PATH: &str = "/upload-document";

/// Client id the ingestion API expects alongside the bearer token.
const INGEST_CLIENT_ID: &str = "enterprise-sync";

/// Client for the document ingestion endpoint.
pub struct IngestionClient {
    http: reqwest::Client,
    base_url: String,
}

impl IngestionClient {
    pub fn new(base_url: impl Into<String>) -> IngestionClient {
        IngestionClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), UPLOAD_PATH)
    }

    /// Build the multipart form, checking local paths before touching the
    /// network.
    fn build_form(request: &UploadRequest) -> Result<Form, UploadError> {
        if !request.document.exists() {
            return Err(UploadError::DocumentNotFound(request.document.clone()));
        }
        let mut form = Form::new().part("file", file_part(&request.document)?);

        for attachment in &request.attachments {
            if !attachment.exists() {
                return Err(UploadError::AttachmentNotFound(attachment.clone()));
            }
            let part = file_part(attachment)?.mime_str(attachment_mime(attachment))?;
            form = form.part("attachments", part);
        }

        Ok(form.text("metadata", request.metadata.to_string()))
    }
}

#[async_trait]
impl Uploader for IngestionClient {
    async fn upload(
        &self,
        token: &Token,
        request: &UploadRequest,
    ) -> Result<IngestReceipt, UploadError> {
        let endpoint = self.endpoint();
        info!(
            document = %request.document.display(),
            attachments = request.attachments.len(),
            endpoint = %endpoint,
            "Uploading document"
        );

        let form = Self::build_form(request)?;
        let response = self
            .http
            .post(&endpoint)
            .header("Authorization", format!("bearer {}", token.access_token))
            .header("clientId", INGEST_CLIENT_ID)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body = %body,
                "Ingestion API rejected upload"
            );
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let receipt: IngestReceipt = serde_json::from_str(&body)
            .map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
        info!(document_id = ?receipt.document_id, "Upload accepted");
        Ok(receipt)
    }
}

fn file_part(path: &Path) -> Result<Part, UploadError> {
    let bytes = fs::read(path).map_err(|source| UploadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    Ok(Part::bytes(bytes).file_name(file_name))
}

/// PDF attachments are labelled as such; everything else goes up as raw bytes.
fn attachment_mime(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
