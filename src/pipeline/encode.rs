//! PDF encoding: raw bytes → base64 payload for the model API.
//!
//! The generative API accepts documents as base64 inline data in the JSON
//! request body. We validate the `%PDF` magic first so a renamed PNG or an
//! empty upload fails with a clear client error instead of an opaque
//! upstream rejection after a full round trip.

use crate::error::ExtractError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

/// MIME type declared alongside the inline document data.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Validate the PDF magic bytes and base64-encode the document.
pub fn encode_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    if bytes.len() < 4 || &bytes[..4] != b"%PDF" {
        let mut magic = [0u8; 4];
        let n = bytes.len().min(4);
        magic[..n].copy_from_slice(&bytes[..n]);
        return Err(ExtractError::NotAPdf { magic });
    }

    let b64 = STANDARD.encode(bytes);
    debug!("Encoded PDF → {} bytes base64", b64.len());
    Ok(b64)
}
