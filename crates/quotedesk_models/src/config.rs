//! Extractor connection settings.

use derive_getters::Getters;
use quotedesk_error::{ConfigError, QuotedeskResult};
use serde::{Deserialize, Serialize};

/// Default chat completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Settings for an OpenAI-compatible extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ExtractorConfig {
    /// Full chat completions URL
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,
    /// Bearer token
    #[serde(default)]
    #[builder(default)]
    api_key: Option<String>,
    /// Maximum tokens per reply
    #[serde(default)]
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(default)]
    #[builder(default)]
    temperature: Option<f32>,
}

impl ExtractorConfig {
    /// Returns a builder for constructing an ExtractorConfig.
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }

    /// The API key, or a configuration error naming the variable to set.
    ///
    /// # Errors
    ///
    /// Fails when the key is missing or blank.
    pub fn require_api_key(&self) -> QuotedeskResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::new(
                "extractor.api_key is not set (export OPENAI_API_KEY or add it to the config file)",
            )
            .into()),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            max_tokens: None,
            temperature: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
