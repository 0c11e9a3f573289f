//! In-memory row store.
//!
//! Holds a header and its data rows behind an `RwLock`. Useful for tests and
//! for running the console against a local snapshot without credentials.

use async_trait::async_trait;
use quotedesk_core::{FIRST_DATA_ROW, Header, Row, Table};
use quotedesk_error::{QuotedeskResult, SheetError, SheetErrorKind};
use quotedesk_interface::RowStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// In-memory row store with the same 1-based addressing as a spreadsheet.
///
/// Clones share the same rows, so a test can hand one clone to the executor
/// and inspect the other.
///
/// # Example
/// ```
/// use quotedesk_core::Header;
/// use quotedesk_sheets::InMemoryRowStore;
///
/// let header = Header::new(vec!["Name".to_string(), "Status".to_string()]).unwrap();
/// let store = InMemoryRowStore::new(header, Vec::new());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRowStore {
    header: Header,
    rows: Arc<RwLock<Vec<Row>>>,
}

impl InMemoryRowStore {
    /// Creates a store holding the given header and rows.
    pub fn new(header: Header, rows: Vec<Row>) -> Self {
        Self {
            header,
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Creates a store from raw values, first row as header.
    ///
    /// # Errors
    ///
    /// Fails when the header contains duplicate column names.
    pub fn from_values(values: Vec<Vec<String>>) -> Result<Self, SheetError> {
        let table = Table::from_values(values)?;
        Ok(Self::new(table.header().clone(), table.rows().clone()))
    }

    /// Number of data rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns true when there are no data rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Copy of the current data rows.
    pub async fn rows(&self) -> Vec<Row> {
        self.rows.read().await.clone()
    }

    fn data_position(row_index: usize, len: usize) -> Result<usize, SheetError> {
        row_index
            .checked_sub(FIRST_DATA_ROW)
            .filter(|position| *position < len)
            .ok_or_else(|| SheetError::new(SheetErrorKind::RowOutOfRange(row_index)))
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn read_all(&self) -> QuotedeskResult<Table> {
        let rows = self.rows.read().await.clone();
        Ok(Table::new(self.header.clone(), rows))
    }

    #[instrument(skip(self, values), fields(cells = values.len()))]
    async fn append(&self, values: &[String]) -> QuotedeskResult<()> {
        let mut rows = self.rows.write().await;
        rows.push(Row::new(values.to_vec()));
        debug!(rows = rows.len(), "Appended row");
        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn update_cell(
        &self,
        row_index: usize,
        col_index: usize,
        value: &str,
    ) -> QuotedeskResult<()> {
        if col_index == 0 || col_index > self.header.len() {
            return Err(SheetError::new(SheetErrorKind::ColumnOutOfRange(col_index)).into());
        }

        let mut rows = self.rows.write().await;
        let position = Self::data_position(row_index, rows.len())?;
        rows[position].set_cell(col_index - 1, value);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_row(&self, row_index: usize) -> QuotedeskResult<()> {
        let mut rows = self.rows.write().await;
        let position = Self::data_position(row_index, rows.len())?;
        rows.remove(position);
        debug!(rows = rows.len(), "Deleted row");
        Ok(())
    }
}
