//! # faktura-extract
//!
//! Extract structured data from Swedish utility-invoice PDFs using a
//! generative vision model.
//!
//! ## Why this crate?
//!
//! Swedish electricity customers receive two separate bills — one from the
//! grid operator (nätfaktura) and one from the energy retailer
//! (energifaktura) — and the fields needed to describe a connection (fuse
//! size, anläggnings-ID, annual consumption) are scattered across both with
//! inconsistent terminology. Instead of brittle per-supplier templates, this
//! crate sends the PDF to a vision model with a fixed Swedish prompt that
//! encodes the disambiguation rules, then validates and merges the replies.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF bytes
//!  │
//!  ├─ 1. Encode       validate %PDF magic, base64
//!  ├─ 2. LLM          one generateContent call, prompt + inline document
//!  ├─ 3. Postprocess  strip fences, parse JSON, fuse-size suffix
//!  └─ 4. Merge        two optional records → one combined record
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use faktura_extract::{extract_invoice, CombinedInvoiceData, ExtractorConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credential read from GEMINI_API_KEY
//!     let config = ExtractorConfig::default();
//!     let grid = extract_invoice(&std::fs::read("natfaktura.pdf")?, &config).await?;
//!     let energy = extract_invoice(&std::fs::read("energifaktura.pdf")?, &config).await?;
//!     let combined = CombinedInvoiceData::merge(Some(&grid), Some(&energy));
//!     println!("{}", serde_json::to_string_pretty(&combined)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `server` | on      | Enables the axum HTTP endpoints and the `faktura-server` binary |
//!
//! Disable `server` when using only the library:
//! ```toml
//! faktura-extract = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod prompts;
pub mod record;
#[cfg(feature = "server")]
pub mod server;
pub mod session;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractorConfig, ExtractorConfigBuilder, DEFAULT_API_KEY_ENV};
pub use error::ExtractError;
pub use extract::extract_invoice;
pub use record::{CombinedInvoiceData, ExtractedInvoiceData, MonthlyConsumption};
pub use session::{UploadSession, UploadStep};
