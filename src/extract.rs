//! Extraction entry point: PDF bytes in, invoice record out.
//!
//! One upload maps to exactly one model call. There is no retry, no
//! concurrency coordination and no state shared across calls — the pipeline
//! stages in [`crate::pipeline`] are pure functions around a single network
//! round trip.

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::pipeline::{encode, llm, postprocess};
use crate::record::ExtractedInvoiceData;
use std::time::Instant;
use tracing::{debug, info};

/// Extract structured invoice data from a PDF held in memory.
///
/// # Errors
/// - [`ExtractError::NotAPdf`] — bytes lack the `%PDF` magic
/// - [`ExtractError::MissingApiKey`] — no credential in config or environment
/// - [`ExtractError::UpstreamApi`] / [`ExtractError::EmptyReply`] — the model
///   call failed or produced nothing
/// - [`ExtractError::MalformedReply`] — the reply was not valid JSON; the
///   error carries a truncated excerpt of the raw reply
pub async fn extract_invoice(
    bytes: &[u8],
    config: &ExtractorConfig,
) -> Result<ExtractedInvoiceData, ExtractError> {
    let start = Instant::now();
    info!("Starting extraction of {} byte PDF", bytes.len());

    // Validate and encode before touching the credential, so a bad upload
    // never needs a configured key to be diagnosed.
    let pdf_base64 = encode::encode_pdf(bytes)?;
    let api_key = config.resolve_api_key()?;

    let reply = llm::request_extraction(&api_key, &pdf_base64, config).await?;
    let record = postprocess::parse_reply(&reply, config.reply_excerpt_len)?;

    debug!(
        "Extraction complete in {:?}: invoice_type={:?}",
        start.elapsed(),
        record.invoice_type
    );
    Ok(record)
}
