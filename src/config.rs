//! Configuration for invoice extraction.
//!
//! All extraction behaviour is controlled through [`ExtractorConfig`], built
//! via its [`ExtractorConfigBuilder`]. One struct makes it trivial to share
//! the config behind an `Arc` in the server state and to diff two runs when
//! their outputs differ.

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};

/// Environment variable holding the Gemini API credential by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration for a single-document extraction.
///
/// Built via [`ExtractorConfig::builder()`] or [`ExtractorConfig::default()`].
///
/// # Example
/// ```rust
/// use faktura_extract::ExtractorConfig;
///
/// let config = ExtractorConfig::builder()
///     .model("gemini-2.5-flash")
///     .api_timeout_secs(90)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Generative model identifier. Default: "gemini-2.5-flash".
    pub model: String,

    /// Sampling temperature. Default: 0.1.
    ///
    /// Low temperature keeps the model deterministic and faithful to what is
    /// printed on the invoice. Higher values introduce creativity that only
    /// worsens field accuracy.
    pub temperature: f32,

    /// Maximum tokens the model may generate for the reply. Default: 2048.
    ///
    /// The expected reply is one JSON object of ~15 fields, well under
    /// 1 000 tokens even with a full year of monthly history. 2 048 leaves
    /// headroom without letting a confused model ramble for pages.
    pub max_output_tokens: usize,

    /// Per-API-call timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Characters of the raw reply kept in a parse-failure diagnostic. Default: 200.
    pub reply_excerpt_len: usize,

    /// Base URL of the generative-model API. Default: the public endpoint.
    ///
    /// Overridable so tests and proxies can point the client elsewhere.
    pub api_base: String,

    /// Explicit API credential. Takes precedence over the environment.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Environment variable consulted when `api_key` is `None`.
    /// Default: [`DEFAULT_API_KEY_ENV`].
    pub api_key_env: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.1,
            max_output_tokens: 2048,
            api_timeout_secs: 60,
            reply_excerpt_len: 200,
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Create a new builder for `ExtractorConfig`.
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder {
            config: Self::default(),
        }
    }

    /// Resolve the API credential: explicit config value first, then the
    /// configured environment variable. Empty strings count as absent.
    pub fn resolve_api_key(&self) -> Result<String, ExtractError> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ExtractError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            }),
        }
    }
}

/// Builder for [`ExtractorConfig`].
#[derive(Debug)]
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
}

impl ExtractorConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_output_tokens(mut self, n: usize) -> Self {
        self.config.max_output_tokens = n.max(1);
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    pub fn reply_excerpt_len(mut self, len: usize) -> Self {
        self.config.reply_excerpt_len = len;
        self
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.config.api_base = base.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn api_key_env(mut self, var: impl Into<String>) -> Self {
        self.config.api_key_env = var.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractorConfig, ExtractError> {
        let c = &self.config;
        if c.model.is_empty() {
            return Err(ExtractError::InvalidConfig("model must not be empty".into()));
        }
        if c.api_base.is_empty() {
            return Err(ExtractError::InvalidConfig(
                "api_base must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ExtractorConfig::default();
        assert_eq!(c.model, "gemini-2.5-flash");
        assert_eq!(c.reply_excerpt_len, 200);
        assert_eq!(c.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn builder_clamps_temperature() {
        let c = ExtractorConfig::builder().temperature(5.0).build().unwrap();
        assert_eq!(c.temperature, 2.0);
    }

    #[test]
    fn empty_model_rejected() {
        let err = ExtractorConfig::builder().model("").build().unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn explicit_key_wins_over_env() {
        let c = ExtractorConfig::builder()
            .api_key("test-key")
            .build()
            .unwrap();
        assert_eq!(c.resolve_api_key().unwrap(), "test-key");
    }

    #[test]
    fn missing_key_reports_env_var() {
        let c = ExtractorConfig::builder()
            .api_key_env("FAKTURA_EXTRACT_NO_SUCH_VAR")
            .build()
            .unwrap();
        let err = c.resolve_api_key().unwrap_err();
        assert!(matches!(err, ExtractError::MissingApiKey { ref env_var }
            if env_var == "FAKTURA_EXTRACT_NO_SUCH_VAR"));
    }

    #[test]
    fn empty_explicit_key_falls_back() {
        let c = ExtractorConfig::builder()
            .api_key("")
            .api_key_env("FAKTURA_EXTRACT_NO_SUCH_VAR")
            .build()
            .unwrap();
        assert!(c.resolve_api_key().is_err());
    }
}
