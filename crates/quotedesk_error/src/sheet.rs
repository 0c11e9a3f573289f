//! Row store (spreadsheet) error types.

/// Kinds of row store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SheetErrorKind {
    /// Expected columns are missing from the header row
    #[display("Header mismatch, missing columns: {}", missing.join(", "))]
    HeaderMismatch {
        /// Columns that were expected but not found
        missing: Vec<String>,
    },
    /// The header row names the same column twice
    #[display("Duplicate column in header: {}", _0)]
    DuplicateColumn(String),
    /// Row index outside the stored data rows
    #[display("Row {} is out of range", _0)]
    RowOutOfRange(usize),
    /// Column index outside the header
    #[display("Column {} is out of range", _0)]
    ColumnOutOfRange(usize),
    /// Worksheet could not be located in the spreadsheet
    #[display("Worksheet not found: {}", _0)]
    WorksheetNotFound(String),
    /// The sheets API answered with a non-success status
    #[display("Sheets API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },
    /// Request could not be sent or the response could not be read
    #[display("Sheets request failed: {}", _0)]
    Request(String),
}

/// Row store error with location tracking.
///
/// # Examples
///
/// ```
/// use quotedesk_error::{SheetError, SheetErrorKind};
///
/// let err = SheetError::new(SheetErrorKind::HeaderMismatch {
///     missing: vec!["Carrier".to_string()],
/// });
/// assert!(format!("{}", err).contains("Carrier"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Sheet Error: {} at line {} in {}", kind, line, file)]
pub struct SheetError {
    /// The kind of error that occurred
    pub kind: SheetErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SheetError {
    /// Create a new sheet error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SheetErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
