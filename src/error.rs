//! Error types for the faktura-extract library.
//!
//! Every variant carries the **user-facing Swedish message** as its `Display`
//! text — the same strings the browser client shows verbatim — while
//! machine-oriented diagnostics (the rejected content type, the raw model
//! reply excerpt, the upstream status line) live in structured fields exposed
//! through [`ExtractError::details`]. Keeping the two apart means handlers
//! never have to re-translate errors and logs never lose the technical cause.
//!
//! None of these errors is retried and none is fatal to the process: each
//! request either produces a record or one of these variants.

use thiserror::Error;

/// All errors returned by the faktura-extract library.
#[derive(Debug, Error)]
pub enum ExtractError {
    // ── Upload errors ─────────────────────────────────────────────────────
    /// The multipart request contained no `file` field.
    #[error("Ingen fil uppladdad")]
    MissingFile,

    /// The uploaded field declared a content type other than `application/pdf`.
    #[error("Endast PDF-filer är tillåtna")]
    UnsupportedType { content_type: String },

    /// The bytes do not start with the `%PDF` magic, whatever the declared type.
    #[error("Endast PDF-filer är tillåtna")]
    NotAPdf { magic: [u8; 4] },

    // ── Configuration errors ──────────────────────────────────────────────
    /// No API credential in config and the configured env var is absent/empty.
    #[error("GEMINI_API_KEY saknas i miljövariabler")]
    MissingApiKey { env_var: String },

    /// Builder validation failed.
    #[error("Ogiltig konfiguration: {0}")]
    InvalidConfig(String),

    // ── Upstream errors ───────────────────────────────────────────────────
    /// The model API call failed (transport error or non-success status).
    #[error("Fel vid bearbetning av PDF")]
    UpstreamApi { detail: String },

    /// The model replied with no candidate text at all.
    #[error("Tomt svar från modellen")]
    EmptyReply,

    /// The reply text was not valid JSON even after fence stripping.
    ///
    /// `excerpt` is a truncated slice of the *raw* reply (not the cleaned
    /// one) so diagnostics show exactly what the model sent.
    #[error("Fel vid tolkning av svar från Gemini")]
    MalformedReply { excerpt: String },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Ett oväntat fel inträffade")]
    Internal(String),
}

impl ExtractError {
    /// Diagnostic detail to attach alongside the user message, when one exists.
    pub fn details(&self) -> Option<String> {
        match self {
            ExtractError::UnsupportedType { content_type } => {
                Some(format!("filtyp: {content_type}"))
            }
            ExtractError::NotAPdf { magic } => Some(format!("första bytes: {magic:?}")),
            ExtractError::MissingApiKey { env_var } => Some(format!("miljövariabel: {env_var}")),
            ExtractError::UpstreamApi { detail } => Some(detail.clone()),
            ExtractError::MalformedReply { excerpt } => Some(excerpt.clone()),
            ExtractError::Internal(detail) => Some(detail.clone()),
            _ => None,
        }
    }

    /// True for errors caused by the caller's upload (HTTP 4xx class).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::MissingFile
                | ExtractError::UnsupportedType { .. }
                | ExtractError::NotAPdf { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_display_is_swedish() {
        assert_eq!(ExtractError::MissingFile.to_string(), "Ingen fil uppladdad");
    }

    #[test]
    fn unsupported_type_carries_content_type() {
        let e = ExtractError::UnsupportedType {
            content_type: "image/png".into(),
        };
        assert_eq!(e.to_string(), "Endast PDF-filer är tillåtna");
        assert!(e.details().unwrap().contains("image/png"));
        assert!(e.is_client_error());
    }

    #[test]
    fn malformed_reply_keeps_excerpt() {
        let e = ExtractError::MalformedReply {
            excerpt: "Här är JSON: {".into(),
        };
        assert!(e.to_string().contains("Gemini"));
        assert_eq!(e.details().unwrap(), "Här är JSON: {");
        assert!(!e.is_client_error());
    }

    #[test]
    fn missing_key_names_env_var() {
        let e = ExtractError::MissingApiKey {
            env_var: "GEMINI_API_KEY".into(),
        };
        assert!(e.details().unwrap().contains("GEMINI_API_KEY"));
    }
}
