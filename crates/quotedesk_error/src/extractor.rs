//! Intent extractor (LLM) error types.

/// Extractor-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtractorErrorKind {
    /// API key not configured
    MissingApiKey,
    /// Request could not be sent
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body did not have the expected shape
    ResponseParsing(String),
    /// Response carried no text output
    EmptyResponse,
    /// Input kind the provider cannot send
    UnsupportedInput(String),
    /// Local image file could not be loaded
    ImageRead(String),
}

impl std::fmt::Display for ExtractorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractorErrorKind::MissingApiKey => {
                write!(f, "OPENAI_API_KEY is not configured")
            }
            ExtractorErrorKind::ApiRequest(msg) => write!(f, "Extractor request failed: {}", msg),
            ExtractorErrorKind::HttpError {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            ExtractorErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse extractor response: {}", msg)
            }
            ExtractorErrorKind::EmptyResponse => write!(f, "Extractor returned no text"),
            ExtractorErrorKind::UnsupportedInput(kind) => {
                write!(f, "Input not supported by this extractor: {}", kind)
            }
            ExtractorErrorKind::ImageRead(msg) => write!(f, "Failed to read image: {}", msg),
        }
    }
}

/// Extractor error with source location tracking.
///
/// # Examples
///
/// ```
/// use quotedesk_error::{ExtractorError, ExtractorErrorKind};
///
/// let err = ExtractorError::new(ExtractorErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorError {
    /// The kind of error that occurred
    pub kind: ExtractorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractorError {
    /// Create a new ExtractorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ExtractorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Extractor Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ExtractorError {}
