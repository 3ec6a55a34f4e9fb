//! Request handlers and the error-to-response mapping.

use crate::error::ExtractError;
use crate::extract::extract_invoice;
use crate::record::{CombinedInvoiceData, ExtractedInvoiceData};
use crate::server::AppState;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Error body: `{error, details?}`, the shape the browser client expects.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        let status = match &self {
            ExtractError::MissingFile
            | ExtractError::UnsupportedType { .. }
            | ExtractError::NotAPdf { .. } => StatusCode::BAD_REQUEST,
            ExtractError::UpstreamApi { .. } | ExtractError::EmptyReply => StatusCode::BAD_GATEWAY,
            ExtractError::MissingApiKey { .. }
            | ExtractError::InvalidConfig(_)
            | ExtractError::MalformedReply { .. }
            | ExtractError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };
        (status, Json(body)).into_response()
    }
}

/// Liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}

/// `POST /api/extract` — multipart form with a `file` PDF field.
pub async fn extract(State(state): State<AppState>, multipart: Multipart) -> Response {
    let bytes = match read_pdf_field(multipart).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Upload rejected: {e}");
            return e.into_response();
        }
    };

    match extract_invoice(&bytes, &state.config).await {
        Ok(record) => {
            info!("Extraction succeeded: invoice_type={:?}", record.invoice_type);
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => {
            warn!("Extraction failed: {e}: {:?}", e.details());
            e.into_response()
        }
    }
}

/// Pull the `file` field out of the multipart body, validating its type.
async fn read_pdf_field(mut multipart: Multipart) -> Result<Vec<u8>, ExtractError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ExtractError::Internal(format!("multipart: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or("").to_string();
        if content_type != "application/pdf" {
            return Err(ExtractError::UnsupportedType { content_type });
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ExtractError::Internal(format!("läsning av fil: {e}")))?;
        return Ok(bytes.to_vec());
    }

    Err(ExtractError::MissingFile)
}

/// `POST /api/combine` request: up to two previously extracted records.
#[derive(Debug, Deserialize)]
pub struct CombineRequest {
    #[serde(default)]
    pub first: Option<ExtractedInvoiceData>,
    #[serde(default)]
    pub second: Option<ExtractedInvoiceData>,
}

/// `POST /api/combine` — merge the two records, first non-empty value wins.
pub async fn combine(Json(req): Json<CombineRequest>) -> Response {
    if req.first.is_none() && req.second.is_none() {
        let body = ErrorBody {
            error: "Inga fakturor att kombinera".to_string(),
            details: None,
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let combined = CombinedInvoiceData::merge(req.first.as_ref(), req.second.as_ref());
    (StatusCode::OK, Json(combined)).into_response()
}
