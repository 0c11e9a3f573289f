//! Input types for extractor requests.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// Content accepted by the intent extractor.
///
/// # Examples
///
/// ```
/// use quotedesk_core::{Input, MediaSource};
///
/// let text = Input::Text("Add John Doe, quoted 422".to_string());
///
/// let image = Input::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Base64("iVBORw0KGgo=".to_string()),
/// };
/// assert!(image.is_image());
/// assert!(!text.is_image());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, GIF).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (URL, base64, or raw bytes)
        source: MediaSource,
    },
}

impl Input {
    /// Returns true for image inputs.
    pub fn is_image(&self) -> bool {
        matches!(self, Input::Image { .. })
    }
}
