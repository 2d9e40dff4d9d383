//! CLI surface for as-ingest: argument parsing and the async entrypoint.
//!
//! All business logic (clients, pipeline, errors) lives in `as-ingest-core`;
//! this module is strictly argument exposure and orchestration. The [`run`]
//! entrypoint is public so integration tests can drive it with a constructed
//! [`Cli`].

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use as_ingest_core::auth::AuthClient;
use as_ingest_core::ingest::ingest;
use as_ingest_core::metadata::MetadataSource;
use as_ingest_core::upload::IngestionClient;

use crate::load_config::load_config;

/// Upload a document to the AlphaSense ingestion API.
#[derive(Parser)]
#[clap(
    name = "as-ingest",
    version,
    about = "Upload a document, with optional attachments and metadata, to the AlphaSense ingestion API"
)]
pub struct Cli {
    /// Path to the document to upload
    pub document: PathBuf,

    /// Path(s) to attachment file(s) (e.g. PDF, DOCX); may be repeated
    #[clap(short = 'a', long = "attachment")]
    pub attachments: Vec<PathBuf>,

    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "alphasense.toml")]
    pub config: PathBuf,

    /// Document metadata: a path to a JSON file, or an inline JSON string
    #[clap(short, long)]
    pub metadata: Option<String>,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

/// Async CLI entrypoint, extracted for integration tests and `main`.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    config.trace_loaded();

    let authenticator = AuthClient::new(&config);
    let uploader = IngestionClient::new(&config.ingestion_base_url);
    let metadata_source = cli.metadata.as_deref().map(MetadataSource::from_arg);

    let report = ingest(
        &authenticator,
        &uploader,
        cli.document,
        cli.attachments,
        metadata_source,
    )
    .await
    .context("document ingest failed")?;

    tracing::info!(
        document = %report.document,
        document_id = ?report.document_id,
        "Document ingested"
    );
    Ok(())
}
