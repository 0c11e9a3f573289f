//! Google Sheets v4 row store.

use crate::SheetConfig;
use async_trait::async_trait;
use quotedesk_core::{FIRST_DATA_ROW, Table};
use quotedesk_error::{QuotedeskResult, SheetError, SheetErrorKind};
use quotedesk_interface::RowStore;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, instrument};

/// Worksheet the store reads and writes, resolved once from metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Worksheet {
    title: String,
    sheet_id: i64,
}

impl Worksheet {
    /// Worksheet title quoted for A1 notation.
    fn quoted_title(&self) -> String {
        format!("'{}'", self.title.replace('\'', "''"))
    }

    /// A1 range covering a single cell.
    fn cell_range(&self, row_index: usize, col_index: usize) -> String {
        format!(
            "{}!{}{}",
            self.quoted_title(),
            column_letter(col_index),
            row_index
        )
    }
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SheetProperties {
    #[serde(default)]
    sheet_id: i64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Converts a 1-based column index to its A1 letters (1 → A, 27 → AA).
pub fn column_letter(col_index: usize) -> String {
    let mut remaining = col_index;
    let mut letters = Vec::new();
    while remaining > 0 {
        let offset = ((remaining - 1) % 26) as u8;
        letters.push((b'A' + offset) as char);
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Row store backed by one worksheet of a Google spreadsheet.
///
/// Requests carry a bearer token supplied through configuration; obtaining
/// and refreshing that token is left to the caller (for example
/// `gcloud auth print-access-token` or a service-account exchange).
#[derive(Debug)]
pub struct GoogleSheetsStore {
    client: Client,
    api_base: String,
    spreadsheet_id: String,
    access_token: String,
    worksheet: Option<String>,
    target: OnceCell<Worksheet>,
}

impl GoogleSheetsStore {
    /// Creates a store for a spreadsheet.
    ///
    /// `worksheet` selects a tab by title; `None` uses the first tab.
    pub fn new(
        api_base: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        access_token: impl Into<String>,
        worksheet: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            spreadsheet_id: spreadsheet_id.into(),
            access_token: access_token.into(),
            worksheet,
            target: OnceCell::new(),
        }
    }

    /// Creates a store from sheet settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the spreadsheet id or access
    /// token is missing.
    pub fn from_config(config: &SheetConfig) -> QuotedeskResult<Self> {
        Ok(Self::new(
            config.api_base().clone(),
            config.require_spreadsheet_id()?,
            config.require_access_token()?,
            config.worksheet().clone(),
        ))
    }

    fn url(&self, segments: &[&str]) -> Result<Url, SheetError> {
        let mut url = Url::parse(&self.api_base).map_err(|e| {
            SheetError::new(SheetErrorKind::Request(format!(
                "Invalid API base '{}': {}",
                self.api_base, e
            )))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                SheetError::new(SheetErrorKind::Request(format!(
                    "API base '{}' cannot hold a path",
                    self.api_base
                )))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.access_token)
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, SheetError> {
        let response = request.send().await.map_err(|e| {
            error!(error = ?e, "Sheets request failed");
            SheetError::new(SheetErrorKind::Request(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "Sheets API error");
            return Err(SheetError::new(SheetErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        response.json::<T>().await.map_err(|e| {
            SheetError::new(SheetErrorKind::Request(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }

    async fn worksheet(&self) -> Result<&Worksheet, SheetError> {
        self.target
            .get_or_try_init(|| async {
                let mut url = self.url(&[self.spreadsheet_id.as_str()])?;
                url.query_pairs_mut()
                    .append_pair("fields", "sheets.properties(sheetId,title)");

                let metadata: SpreadsheetMetadata =
                    self.send(self.request(Method::GET, url)).await?;

                let entry = match &self.worksheet {
                    Some(title) => metadata
                        .sheets
                        .into_iter()
                        .find(|sheet| &sheet.properties.title == title),
                    None => metadata.sheets.into_iter().next(),
                }
                .ok_or_else(|| {
                    SheetError::new(SheetErrorKind::WorksheetNotFound(
                        self.worksheet
                            .clone()
                            .unwrap_or_else(|| "(first worksheet)".to_string()),
                    ))
                })?;

                info!(
                    title = %entry.properties.title,
                    sheet_id = entry.properties.sheet_id,
                    "Resolved worksheet"
                );
                Ok::<_, SheetError>(Worksheet {
                    title: entry.properties.title,
                    sheet_id: entry.properties.sheet_id,
                })
            })
            .await
    }
}

#[async_trait]
impl RowStore for GoogleSheetsStore {
    #[instrument(skip(self), fields(spreadsheet = %self.spreadsheet_id))]
    async fn read_all(&self) -> QuotedeskResult<Table> {
        let worksheet = self.worksheet().await?;
        let url = self.url(&[
            self.spreadsheet_id.as_str(),
            "values",
            worksheet.quoted_title().as_str(),
        ])?;

        let range: ValueRange = self.send(self.request(Method::GET, url)).await?;
        debug!(rows = range.values.len(), "Read worksheet values");

        Ok(Table::from_values(range.values)?)
    }

    #[instrument(skip(self, values), fields(spreadsheet = %self.spreadsheet_id, cells = values.len()))]
    async fn append(&self, values: &[String]) -> QuotedeskResult<()> {
        let worksheet = self.worksheet().await?;
        let segment = format!("{}!A1:append", worksheet.quoted_title());
        let mut url = self.url(&[self.spreadsheet_id.as_str(), "values", segment.as_str()])?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let body = json!({ "majorDimension": "ROWS", "values": [values] });
        let _: serde_json::Value = self
            .send(self.request(Method::POST, url).json(&body))
            .await?;
        debug!("Appended row");
        Ok(())
    }

    #[instrument(skip(self, value), fields(spreadsheet = %self.spreadsheet_id))]
    async fn update_cell(
        &self,
        row_index: usize,
        col_index: usize,
        value: &str,
    ) -> QuotedeskResult<()> {
        if row_index < FIRST_DATA_ROW {
            return Err(SheetError::new(SheetErrorKind::RowOutOfRange(row_index)).into());
        }
        if col_index == 0 {
            return Err(SheetError::new(SheetErrorKind::ColumnOutOfRange(col_index)).into());
        }

        let worksheet = self.worksheet().await?;
        let range = worksheet.cell_range(row_index, col_index);
        let mut url = self.url(&[self.spreadsheet_id.as_str(), "values", range.as_str()])?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");

        let body = json!({ "range": range, "majorDimension": "ROWS", "values": [[value]] });
        let _: serde_json::Value = self
            .send(self.request(Method::PUT, url).json(&body))
            .await?;
        debug!(range = %range, "Updated cell");
        Ok(())
    }

    #[instrument(skip(self), fields(spreadsheet = %self.spreadsheet_id))]
    async fn delete_row(&self, row_index: usize) -> QuotedeskResult<()> {
        if row_index < FIRST_DATA_ROW {
            return Err(SheetError::new(SheetErrorKind::RowOutOfRange(row_index)).into());
        }

        let worksheet = self.worksheet().await?;
        let segment = format!("{}:batchUpdate", self.spreadsheet_id);
        let url = self.url(&[segment.as_str()])?;

        // deleteDimension takes a 0-based, end-exclusive range.
        let body = json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": worksheet.sheet_id,
                        "dimension": "ROWS",
                        "startIndex": row_index - 1,
                        "endIndex": row_index,
                    }
                }
            }]
        });
        let _: serde_json::Value = self
            .send(self.request(Method::POST, url).json(&body))
            .await?;
        debug!(row_index, "Deleted row");
        Ok(())
    }
}
