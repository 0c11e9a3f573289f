//! Spreadsheet table model.
//!
//! A [`Table`] is a snapshot of the row store: the header row plus every data
//! row beneath it. Store coordinates are 1-based with the header on row 1,
//! so the data row at position `i` in [`Table::rows`] lives on store row
//! `i + 2`.

use derive_getters::Getters;
use quotedesk_error::{SheetError, SheetErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Store row index of the first data row.
pub const FIRST_DATA_ROW: usize = 2;

/// Ordered, unique column names.
///
/// # Examples
///
/// ```
/// use quotedesk_core::Header;
///
/// let header = Header::new(vec!["Name".to_string(), "Status".to_string()]).unwrap();
/// assert_eq!(header.position("Status"), Some(1));
/// assert_eq!(header.position("status"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Header(Vec<String>);

impl Header {
    /// Builds a header, dropping trailing blank names.
    ///
    /// # Errors
    ///
    /// Fails with [`SheetErrorKind::DuplicateColumn`] when a non-empty name
    /// appears twice.
    pub fn new(mut columns: Vec<String>) -> Result<Self, SheetError> {
        while columns.last().is_some_and(|name| name.trim().is_empty()) {
            columns.pop();
        }

        for (index, name) in columns.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            if columns[..index].contains(name) {
                return Err(SheetError::new(SheetErrorKind::DuplicateColumn(
                    name.clone(),
                )));
            }
        }

        Ok(Self(columns))
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.0
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the header has no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 0-based position of a column, matched exactly. Blank names never
    /// match, even against a blank column inside the header.
    pub fn position(&self, column: &str) -> Option<usize> {
        if column.is_empty() {
            return None;
        }
        self.0.iter().position(|name| name == column)
    }

    /// 1-based store column index of a column.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.position(column).map(|position| position + 1)
    }

    /// Returns true when the header contains the column.
    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }
}

/// One record's cells, aligned to the header.
///
/// A row may be shorter than the header; missing cells read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Row(Vec<String>);

impl Row {
    /// Creates a row from cell values.
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Cell at a 0-based position, empty when beyond the stored length.
    pub fn cell(&self, position: usize) -> &str {
        self.0.get(position).map(String::as_str).unwrap_or("")
    }

    /// Stored cells (trailing blanks may be elided).
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Sets a cell, padding with empty cells as needed.
    pub fn set_cell(&mut self, position: usize, value: impl Into<String>) {
        if self.0.len() <= position {
            self.0.resize(position + 1, String::new());
        }
        self.0[position] = value.into();
    }

    /// Consumes the row into its cells.
    pub fn into_cells(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

/// Case-insensitive, whitespace-trimmed comparison used for row matching.
pub fn cells_match(cell: &str, value: &str) -> bool {
    cell.trim().to_lowercase() == value.trim().to_lowercase()
}

/// Snapshot of the row store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Table {
    /// Header row
    header: Header,
    /// Data rows, top to bottom
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from a header and data rows.
    pub fn new(header: Header, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Builds a table from raw sheet values, treating the first row as the header.
    ///
    /// # Errors
    ///
    /// Fails when the header contains duplicate column names.
    pub fn from_values(mut values: Vec<Vec<String>>) -> Result<Self, SheetError> {
        if values.is_empty() {
            return Ok(Self::new(Header::new(Vec::new())?, Vec::new()));
        }
        let header = Header::new(values.remove(0))?;
        let rows = values.into_iter().map(Row::new).collect();
        Ok(Self::new(header, rows))
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first row whose cell in `position` matches `value`.
    pub fn find_first(&self, position: usize, value: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| cells_match(row.cell(position), value))
    }

    /// Store row index (1-based, header on row 1) of a data row position.
    pub fn store_row_index(position: usize) -> usize {
        position + FIRST_DATA_ROW
    }

    /// Fails unless every expected column is present in the header.
    ///
    /// # Errors
    ///
    /// Returns [`SheetErrorKind::HeaderMismatch`] listing the missing columns.
    pub fn require_columns<S: AsRef<str>>(&self, expected: &[S]) -> Result<(), SheetError> {
        let missing: Vec<String> = expected
            .iter()
            .map(AsRef::as_ref)
            .filter(|column| !self.header.contains(column))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SheetError::new(SheetErrorKind::HeaderMismatch { missing }))
        }
    }

    /// One JSON object per data row, keyed by header column.
    ///
    /// Blank header columns are skipped and missing cells read as "".
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .columns()
                    .iter()
                    .enumerate()
                    .filter(|(_, name)| !name.is_empty())
                    .map(|(position, name)| {
                        (name.clone(), Value::String(row.cell(position).to_string()))
                    })
                    .collect()
            })
            .collect()
    }
}
