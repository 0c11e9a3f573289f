//! Webhook listener settings.

use derive_getters::Getters;
use quotedesk_error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// Default webhook route.
pub const DEFAULT_PATH: &str = "/api/webhook";

/// Default handshake token, the value entered in the platform dashboard.
pub const DEFAULT_VERIFY_TOKEN: &str = "api_webhook_token";

/// Settings for the webhook listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct WebhookConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    #[builder(default = "default_bind()")]
    bind: String,
    /// Route serving both the handshake and event delivery
    #[serde(default = "default_path")]
    #[builder(default = "default_path()")]
    path: String,
    /// Token the platform must echo during the handshake
    #[serde(default = "default_verify_token")]
    #[builder(default = "default_verify_token()")]
    verify_token: String,
}

impl WebhookConfig {
    /// Returns a builder for constructing a WebhookConfig.
    pub fn builder() -> WebhookConfigBuilder {
        WebhookConfigBuilder::default()
    }

    /// Checks that the webhook path can be mounted next to `/health`.
    ///
    /// # Errors
    ///
    /// Fails when the path does not start with `/`, is `/health`, or
    /// carries route captures (`:` or `*`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let path = self.path.as_str();
        if !path.starts_with('/') {
            return Err(ConfigError::new(format!(
                "webhook.path must start with '/': {:?}",
                path
            )));
        }
        if path == "/health" {
            return Err(ConfigError::new("webhook.path cannot be /health"));
        }
        if path.contains([':', '*']) {
            return Err(ConfigError::new(format!(
                "webhook.path cannot contain route captures: {:?}",
                path
            )));
        }
        Ok(())
    }

    /// Returns these settings listening on another address.
    pub fn with_bind(self, bind: impl Into<String>) -> Self {
        Self {
            bind: bind.into(),
            ..self
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            path: default_path(),
            verify_token: default_verify_token(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

fn default_verify_token() -> String {
    DEFAULT_VERIFY_TOKEN.to_string()
}
