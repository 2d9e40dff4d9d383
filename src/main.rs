use anyhow::Result;
use as_ingest::cli::{run, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment (secrets may live in a .env file).
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::info!("Starting AlphaSense ingestor");

    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("Ingest completed successfully"),
        Err(e) => tracing::error!(error = %e, "Ingest exited with error"),
    }
    result
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}
