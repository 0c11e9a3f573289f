//! Error types for the Quotedesk sheet assistant.
//!
//! Every error records the source location where it was created, so log
//! lines point at the call site that failed rather than at a `?`.

#![warn(missing_docs)]

mod extractor;
mod message;
mod sheet;

pub use extractor::{ExtractorError, ExtractorErrorKind};
pub use message::{ConfigError, HttpError, JsonError};
pub use sheet::{SheetError, SheetErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum QuotedeskErrorKind {
    /// HTTP error
    #[display("{}", _0)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[display("{}", _0)]
    Json(JsonError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Row store error
    #[display("{}", _0)]
    Sheet(SheetError),
    /// Intent extractor error
    #[display("{}", _0)]
    Extractor(ExtractorError),
}

/// Quotedesk error with kind discrimination.
#[derive(Debug)]
pub struct QuotedeskError(Box<QuotedeskErrorKind>);

impl QuotedeskError {
    /// Create a new error from a kind.
    pub fn new(kind: QuotedeskErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &QuotedeskErrorKind {
        &self.0
    }
}

impl std::fmt::Display for QuotedeskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Quotedesk Error: {}", self.0)
    }
}

impl std::error::Error for QuotedeskError {}

impl<T> From<T> for QuotedeskError
where
    T: Into<QuotedeskErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Quotedesk operations.
pub type QuotedeskResult<T> = std::result::Result<T, QuotedeskError>;
