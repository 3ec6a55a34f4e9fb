//! HTTP surface: router and shared state (feature `server`).
//!
//! Three routes, one per operation:
//!
//! - `GET  /health`       — liveness probe
//! - `POST /api/extract`  — multipart PDF upload → extracted record
//! - `POST /api/combine`  — two optional records → merged record
//!
//! The default axum body limit (2 MiB) is raised because scanned invoice
//! PDFs regularly run 5–10 MiB.

pub mod handlers;

use crate::config::ExtractorConfig;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;

/// Upload size cap: generous for scanned invoices, still bounded.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ExtractorConfig>,
}

impl AppState {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/extract", post(handlers::extract))
        .route("/api/combine", post(handlers::combine))
        .layer(
            ServiceBuilder::new().layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(state)
}
