//! Layered application settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`quotedesk.toml` in the working directory, or `--config`)
//! 3. `QUOTEDESK_` environment variables, `__` between sections
//!    (`QUOTEDESK_SHEET__TITLE`, `QUOTEDESK_WEBHOOK__BIND`, ...);
//!    `QUOTEDESK_SHEET__EXPECTED_COLUMNS` takes a comma-separated list
//! 4. The well-known secrets `OPENAI_API_KEY`, `GOOGLE_SHEETS_ACCESS_TOKEN`,
//!    `GOOGLE_SHEETS_SPREADSHEET_ID` and `WEBHOOK_VERIFY_TOKEN`

use ::config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use quotedesk_error::{ConfigError, QuotedeskResult};
use quotedesk_models::ExtractorConfig;
use quotedesk_server::WebhookConfig;
use quotedesk_sheets::SheetConfig;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use tracing::debug;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "quotedesk.toml";

/// Well-known environment variables that override the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `OPENAI_API_KEY`
    pub openai_api_key: Option<String>,
    /// `GOOGLE_SHEETS_ACCESS_TOKEN`
    pub sheets_access_token: Option<String>,
    /// `GOOGLE_SHEETS_SPREADSHEET_ID`
    pub spreadsheet_id: Option<String>,
    /// `WEBHOOK_VERIFY_TOKEN`
    pub verify_token: Option<String>,
}

impl EnvOverrides {
    /// Reads the overrides from the process environment.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            openai_api_key: var("OPENAI_API_KEY"),
            sheets_access_token: var("GOOGLE_SHEETS_ACCESS_TOKEN"),
            spreadsheet_id: var("GOOGLE_SHEETS_SPREADSHEET_ID"),
            verify_token: var("WEBHOOK_VERIFY_TOKEN"),
        }
    }
}

/// Complete application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct QuotedeskConfig {
    /// Intent extractor connection
    #[serde(default)]
    extractor: ExtractorConfig,
    /// Row store connection
    #[serde(default)]
    sheet: SheetConfig,
    /// Webhook listener
    #[serde(default)]
    webhook: WebhookConfig,
}

impl QuotedeskConfig {
    /// Loads settings from `.env`, the config file and the environment.
    ///
    /// # Errors
    ///
    /// Fails when an explicitly named file is missing, or any source cannot
    /// be parsed into settings.
    pub fn load(path: Option<&Path>) -> QuotedeskResult<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!(path = %env_file.display(), "Loaded .env");
        }
        Self::load_with(path, &EnvOverrides::from_env())
    }

    /// Loads settings with explicit well-known overrides.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with(path: Option<&Path>, overrides: &EnvOverrides) -> QuotedeskResult<Self> {
        Self::load_with_env(path, overrides, None)
    }

    /// Loads settings reading `QUOTEDESK_` variables from `vars` instead of
    /// the process environment when given.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load). Also fails when the webhook path is not a
    /// usable route.
    pub fn load_with_env(
        path: Option<&Path>,
        overrides: &EnvOverrides,
        vars: Option<HashMap<String, String>>,
    ) -> QuotedeskResult<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("QUOTEDESK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("sheet.expected_columns")
                    .source(vars.map(|vars| vars.into_iter().collect())),
            )
            .set_override_option("extractor.api_key", overrides.openai_api_key.clone())
            .and_then(|b| {
                b.set_override_option("sheet.access_token", overrides.sheets_access_token.clone())
            })
            .and_then(|b| b.set_override_option("sheet.spreadsheet_id", overrides.spreadsheet_id.clone()))
            .and_then(|b| b.set_override_option("webhook.verify_token", overrides.verify_token.clone()))
            .and_then(|b| b.build())
            .map_err(|e| ConfigError::new(format!("Failed to load settings: {}", e)))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid settings: {}", e)))?;
        config.webhook.validate()?;

        debug!(
            model = %config.extractor.model(),
            sheet = %config.sheet.title(),
            bind = %config.webhook.bind(),
            "Settings loaded"
        );
        Ok(config)
    }

    /// Replaces the webhook bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.webhook = self.webhook.with_bind(bind);
        self
    }
}
