//! Media source types for image uploads.

use serde::{Deserialize, Serialize};

/// Where image content is sourced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL the provider fetches itself
    Url(String),
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}
