//! Model interaction: build the generateContent request and read the reply.
//!
//! This module is intentionally thin — the prompt lives in
//! [`crate::prompts`] and reply interpretation in
//! [`crate::pipeline::postprocess`], so the wire format can change without
//! touching either.
//!
//! One request per upload, no retries: the caller is a human waiting on a
//! form submit, and a failed extraction is simply re-submitted from the
//! browser. The only resilience here is the per-call timeout.

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::pipeline::encode::PDF_MIME_TYPE;
use crate::prompts::EXTRACTION_PROMPT;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

// ── Request body ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

/// A content part is either inline document data or prompt text.
#[derive(Debug, Serialize)]
struct Part<'a> {
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: usize,
}

// ── Response body ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

// ── Call ──────────────────────────────────────────────────────────────────

/// Submit the base64 PDF plus the extraction prompt and return the reply text.
///
/// The request carries two parts in one user turn: the document as
/// `inlineData` and the instruction prompt as text — the layout the
/// generative API expects for document understanding.
pub async fn request_extraction(
    api_key: &str,
    pdf_base64: &str,
    config: &ExtractorConfig,
) -> Result<String, ExtractError> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        config.api_base.trim_end_matches('/'),
        config.model
    );

    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    inline_data: Some(InlineData {
                        mime_type: PDF_MIME_TYPE,
                        data: pdf_base64,
                    }),
                    text: None,
                },
                Part {
                    inline_data: None,
                    text: Some(EXTRACTION_PROMPT),
                },
            ],
        }],
        generation_config: GenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        },
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.api_timeout_secs))
        .build()
        .map_err(|e| ExtractError::Internal(format!("http client: {e}")))?;

    info!("Sending PDF to model {}", config.model);
    let start = Instant::now();

    let response = client
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ExtractError::UpstreamApi {
                    detail: format!("timeout efter {}s", config.api_timeout_secs),
                }
            } else {
                ExtractError::UpstreamApi {
                    detail: e.to_string(),
                }
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ExtractError::UpstreamApi {
            detail: format!("HTTP {status}: {}", truncate(&body, 300)),
        });
    }

    let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
        ExtractError::UpstreamApi {
            detail: format!("svarskropp: {e}"),
        }
    })?;

    // A candidate reply may be split over several text parts; join them.
    let text: String = parsed
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ExtractError::EmptyReply);
    }

    debug!(
        "Model replied with {} chars in {:?}",
        text.len(),
        start.elapsed()
    );
    Ok(text)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: PDF_MIME_TYPE,
                            data: "AAAA",
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some("prompt"),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 2048,
            },
        };

        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(
            v["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "application/pdf"
        );
        assert_eq!(v["contents"][0]["parts"][1]["text"], "prompt");
        assert_eq!(v["generationConfig"]["maxOutputTokens"], 2048);
        // The data part must not leak a null text key and vice versa
        assert!(v["contents"][0]["parts"][0].get("text").is_none());
        assert!(v["contents"][0]["parts"][1].get("inlineData").is_none());
    }

    #[test]
    fn reply_parts_are_joined() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"invoice"}, {"text": "_type\": null}"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .as_ref()
            .unwrap()
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, r#"{"invoice_type": null}"#);
    }

    #[test]
    fn empty_candidates_deserialise() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
