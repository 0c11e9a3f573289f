//! Row store trait.

use async_trait::async_trait;
use quotedesk_core::Table;
use quotedesk_error::QuotedeskResult;

/// An ordered table addressed by 1-based row and column indices.
///
/// Row 1 holds the header; data rows start at row 2. Implementations must
/// make every mutation visible to the next [`read_all`](RowStore::read_all)
/// call, since the action executor re-scans after each change.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Read the header and every data row.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or its header is invalid.
    async fn read_all(&self) -> QuotedeskResult<Table>;

    /// Append a row after the last data row.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    async fn append(&self, values: &[String]) -> QuotedeskResult<()>;

    /// Set a single cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the indices are out of range or the write fails.
    async fn update_cell(&self, row_index: usize, col_index: usize, value: &str)
    -> QuotedeskResult<()>;

    /// Remove a row, shifting the rows below it up by one.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the delete fails.
    async fn delete_row(&self, row_index: usize) -> QuotedeskResult<()>;
}
