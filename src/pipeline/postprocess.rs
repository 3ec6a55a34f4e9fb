//! Post-processing: turn the raw model reply into a validated record.
//!
//! Even when told "svara ENDAST med JSON", models routinely wrap the object
//! in ```` ```json ```` fences or prepend a sentence of commentary. The rules
//! here are cheap and deterministic:
//!
//! 1. Strip every markdown fence marker from the reply
//! 2. Parse the remainder as JSON into [`ExtractedInvoiceData`]
//! 3. Normalise the fuse-size suffix ("25" → "25A", "25a" untouched)
//!
//! A parse failure keeps a truncated excerpt of the *raw* reply for
//! diagnostics, so the caller sees what the model actually sent.

use crate::error::ExtractError;
use crate::record::ExtractedInvoiceData;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_FENCES: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?\n?").unwrap());

/// Remove every ```` ```json ```` / ```` ``` ```` marker and trim.
fn strip_reply_fences(input: &str) -> String {
    RE_FENCES.replace_all(input, "").trim().to_string()
}

/// Parse the model's reply text into an invoice record.
///
/// `excerpt_len` caps how many characters of the raw reply survive in a
/// [`ExtractError::MalformedReply`] diagnostic.
pub fn parse_reply(raw: &str, excerpt_len: usize) -> Result<ExtractedInvoiceData, ExtractError> {
    let cleaned = strip_reply_fences(raw);

    let mut record: ExtractedInvoiceData =
        serde_json::from_str(&cleaned).map_err(|_| ExtractError::MalformedReply {
            excerpt: truncate_excerpt(raw, excerpt_len),
        })?;

    record.fuse_size = normalise_fuse_size(record.fuse_size);
    Ok(record)
}

/// Append "A" to a fuse size lacking the amperage suffix.
///
/// Values already ending in `A`/`a` pass through unchanged; whitespace-only
/// values become `None` rather than a lone "A".
pub fn normalise_fuse_size(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with('A') || trimmed.ends_with('a') {
        Some(trimmed)
    } else {
        Some(format!("{trimmed}A"))
    }
}

/// Char-boundary-safe truncation for diagnostics.
fn truncate_excerpt(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let input = "```json\n{\"name\": \"Anna\"}\n```";
        assert_eq!(strip_reply_fences(input), "{\"name\": \"Anna\"}");
    }

    #[test]
    fn strips_fence_without_language() {
        let input = "```\n{\"name\": null}\n```";
        assert_eq!(strip_reply_fences(input), "{\"name\": null}");
    }

    #[test]
    fn bare_json_passes_through() {
        let input = "{\"name\": null}";
        assert_eq!(strip_reply_fences(input), input);
    }

    #[test]
    fn parses_full_reply() {
        let raw = r#"```json
{
  "invoice_type": "Nätfaktura",
  "name": "Anna Andersson",
  "fuse_size": "16",
  "total_consumed_kwh_period": 450.5,
  "expected_source": "not_available",
  "historical_monthly_kwh": [{"month": "2026-01", "kwh": 350.0}]
}
```"#;
        let record = parse_reply(raw, 200).unwrap();
        assert_eq!(record.invoice_type.as_deref(), Some("Nätfaktura"));
        assert_eq!(record.fuse_size.as_deref(), Some("16A"));
        assert_eq!(record.total_consumed_kwh_period, Some(450.5));
        assert_eq!(record.historical_monthly_kwh.unwrap()[0].month, "2026-01");
    }

    #[test]
    fn malformed_reply_carries_truncated_excerpt() {
        let raw = "Jag kan tyvärr inte läsa dokumentet eftersom det verkar vara skadat.";
        let err = parse_reply(raw, 20).unwrap_err();
        match err {
            ExtractError::MalformedReply { excerpt } => {
                assert_eq!(excerpt.chars().count(), 20);
                assert!(raw.starts_with(&excerpt));
            }
            other => panic!("expected MalformedReply, got {other:?}"),
        }
    }

    #[test]
    fn excerpt_truncation_is_char_safe() {
        // Multi-byte Swedish chars right at the cut point must not panic.
        let raw = "åäöåäöåäö inte JSON";
        let err = parse_reply(raw, 5).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedReply { excerpt } if excerpt == "åäöåä"));
    }

    #[test]
    fn fuse_size_suffix_added() {
        assert_eq!(normalise_fuse_size(Some("25".into())).as_deref(), Some("25A"));
    }

    #[test]
    fn fuse_size_uppercase_a_unchanged() {
        assert_eq!(normalise_fuse_size(Some("25A".into())).as_deref(), Some("25A"));
    }

    #[test]
    fn fuse_size_lowercase_a_unchanged() {
        assert_eq!(normalise_fuse_size(Some("25a".into())).as_deref(), Some("25a"));
    }

    #[test]
    fn fuse_size_trimmed() {
        assert_eq!(normalise_fuse_size(Some(" 16 ".into())).as_deref(), Some("16A"));
    }

    #[test]
    fn blank_fuse_size_becomes_none() {
        assert_eq!(normalise_fuse_size(Some("   ".into())), None);
        assert_eq!(normalise_fuse_size(None), None);
    }
}
