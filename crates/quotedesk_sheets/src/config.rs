//! Spreadsheet connection settings.

use derive_getters::Getters;
use quotedesk_error::{ConfigError, QuotedeskResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Default Sheets v4 endpoint.
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Columns the quotes sheet is expected to carry.
pub const DEFAULT_EXPECTED_COLUMNS: [&str; 9] = [
    "Date",
    "Status",
    "Name",
    "Phone Number",
    "Quoted",
    "Sold",
    "Carrier",
    "Ready to call",
    "Notes",
];

/// Settings for the spreadsheet row store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct SheetConfig {
    /// Display name used in the console banner and in prompts
    #[serde(default = "default_title")]
    #[builder(default = "default_title()")]
    title: String,
    /// Spreadsheet id (the long token in the sheet URL)
    #[serde(default)]
    #[builder(default)]
    spreadsheet_id: Option<String>,
    /// Worksheet title; the first worksheet when unset
    #[serde(default)]
    #[builder(default)]
    worksheet: Option<String>,
    /// OAuth bearer token with the spreadsheets scope
    #[serde(default)]
    #[builder(default)]
    access_token: Option<String>,
    /// Columns every read must find in the header row
    #[serde(
        default = "default_expected_columns",
        deserialize_with = "trimmed_columns"
    )]
    #[builder(default = "default_expected_columns()")]
    expected_columns: Vec<String>,
    /// Sheets API base URL
    #[serde(default = "default_api_base")]
    #[builder(default = "default_api_base()")]
    api_base: String,
}

impl SheetConfig {
    /// Returns a builder for constructing a SheetConfig.
    pub fn builder() -> SheetConfigBuilder {
        SheetConfigBuilder::default()
    }

    /// The spreadsheet id, or a configuration error.
    ///
    /// # Errors
    ///
    /// Fails when the id is missing or blank.
    pub fn require_spreadsheet_id(&self) -> QuotedeskResult<&str> {
        non_blank(self.spreadsheet_id.as_deref()).ok_or_else(|| {
            ConfigError::new(
                "sheet.spreadsheet_id is not set (export GOOGLE_SHEETS_SPREADSHEET_ID)",
            )
            .into()
        })
    }

    /// The access token, or a configuration error.
    ///
    /// # Errors
    ///
    /// Fails when the token is missing or blank.
    pub fn require_access_token(&self) -> QuotedeskResult<&str> {
        non_blank(self.access_token.as_deref()).ok_or_else(|| {
            ConfigError::new("sheet.access_token is not set (export GOOGLE_SHEETS_ACCESS_TOKEN)")
                .into()
        })
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            spreadsheet_id: None,
            worksheet: None,
            access_token: None,
            expected_columns: default_expected_columns(),
            api_base: default_api_base(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_title() -> String {
    "Quotes".to_string()
}

fn default_expected_columns() -> Vec<String> {
    DEFAULT_EXPECTED_COLUMNS
        .iter()
        .map(|column| column.to_string())
        .collect()
}

/// Column lists from the environment arrive as `"Date, Status"`.
fn trimmed_columns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let columns = Vec::<String>::deserialize(deserializer)?;
    Ok(columns
        .into_iter()
        .map(|column| column.trim().to_string())
        .filter(|column| !column.is_empty())
        .collect())
}

fn default_api_base() -> String {
    DEFAULT_SHEETS_API_BASE.to_string()
}
