//! Intent extractor trait.

use async_trait::async_trait;
use quotedesk_core::{GenerateRequest, GenerateResponse, Input, Message, Role};
use quotedesk_error::{ExtractorError, ExtractorErrorKind, QuotedeskResult};
use tracing::debug;

/// External reasoning capability that turns instructions into text.
///
/// Calls are stateless: no conversation memory is kept between calls, so
/// callers re-send whatever context the extractor needs every time.
#[async_trait]
pub trait IntentExtractor: Send + Sync {
    /// Send a request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be reached or answers with
    /// a failure.
    async fn generate(&self, req: &GenerateRequest) -> QuotedeskResult<GenerateResponse>;

    /// Provider name used in logs.
    fn provider_name(&self) -> &'static str;

    /// Model identifier used in logs.
    fn model_name(&self) -> &str;

    /// Send system instructions plus one user message and return its text.
    ///
    /// `user_content` is either a single text block or a text block followed
    /// by an image.
    ///
    /// # Errors
    ///
    /// Propagates [`generate`](IntentExtractor::generate) failures and
    /// returns [`ExtractorErrorKind::EmptyResponse`] when the reply carries
    /// no text.
    async fn complete(
        &self,
        system_instructions: &str,
        user_content: Vec<Input>,
    ) -> QuotedeskResult<String> {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system(system_instructions),
                Message::new(Role::User, user_content),
            ])
            .build()
            .map_err(|e| ExtractorError::new(ExtractorErrorKind::ApiRequest(e.to_string())))?;

        let response = self.generate(&request).await?;
        let text = response
            .text()
            .ok_or_else(|| ExtractorError::new(ExtractorErrorKind::EmptyResponse))?;

        debug!(
            provider = self.provider_name(),
            model = self.model_name(),
            chars = text.len(),
            "Extractor completed"
        );
        Ok(text)
    }
}
