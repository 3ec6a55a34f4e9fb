//! HTTP server binary for faktura-extract.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractorConfig` and serves the axum router.

use anyhow::{Context, Result};
use clap::Parser;
use faktura_extract::server::{app, AppState};
use faktura_extract::ExtractorConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "faktura-server",
    version,
    about = "Extract structured data from Swedish utility-invoice PDFs"
)]
struct Cli {
    /// Listen address
    #[arg(long, env = "FAKTURA_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Listen port
    #[arg(long, env = "FAKTURA_PORT", default_value_t = 8080)]
    port: u16,

    /// Generative model identifier
    #[arg(long, env = "FAKTURA_MODEL", default_value = "gemini-2.5-flash")]
    model: String,

    /// Per-API-call timeout in seconds
    #[arg(long, default_value_t = 60)]
    api_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ExtractorConfig::builder()
        .model(&cli.model)
        .api_timeout_secs(cli.api_timeout_secs)
        .build()
        .context("invalid configuration")?;
    info!("Starting server with model {}", config.model);

    let state = AppState::new(config);
    let router = app(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/extract  - multipart PDF upload → extracted record");
    info!("  POST /api/combine  - two records → merged record");
    info!("  GET  /health       - liveness probe");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
