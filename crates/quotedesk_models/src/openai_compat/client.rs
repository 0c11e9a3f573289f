//! Generic client for OpenAI-compatible APIs.

use crate::ExtractorConfig;
use crate::openai_compat::{ChatResponse, OpenAICompatError, conversions};
use async_trait::async_trait;
use quotedesk_core::{GenerateRequest, GenerateResponse};
use quotedesk_error::{ExtractorError, QuotedeskResult};
use quotedesk_interface::IntentExtractor;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Intent extractor backed by an OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key for authentication
    /// * `model` - Model identifier
    /// * `base_url` - Full chat completions URL
    /// * `provider_name` - Name of the provider (for logging/tracing)
    #[instrument(skip(api_key), fields(provider = provider_name, model = %model))]
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        provider_name: &'static str,
    ) -> Self {
        debug!(
            provider = provider_name,
            model = %model,
            url = %base_url,
            "Created OpenAI-compatible client"
        );

        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
            max_tokens: None,
            temperature: None,
            provider_name,
        }
    }

    /// Creates a client from extractor settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is configured.
    pub fn from_config(config: &ExtractorConfig) -> QuotedeskResult<Self> {
        let api_key = config.require_api_key()?.to_string();
        let mut client = Self::new(
            api_key,
            config.model().clone(),
            config.base_url().clone(),
            "openai",
        );
        client.max_tokens = *config.max_tokens();
        client.temperature = *config.temperature();
        Ok(client)
    }

    /// Sends a chat completion request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, req), fields(provider = self.provider_name, model = %self.model))]
    pub async fn chat(&self, req: &GenerateRequest) -> Result<GenerateResponse, OpenAICompatError> {
        let chat_request =
            conversions::to_chat_request(req, &self.model, self.max_tokens, self.temperature)?;

        debug!(
            provider = self.provider_name,
            message_count = chat_request.messages().len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = self.provider_name, error = ?e, "HTTP request failed");
                OpenAICompatError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(OpenAICompatError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            OpenAICompatError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                provider = self.provider_name,
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                total_tokens = ?usage.total_tokens,
                "Received response"
            );
        }

        conversions::from_chat_response(&chat_response)
    }
}

#[async_trait]
impl IntentExtractor for OpenAICompatibleClient {
    async fn generate(&self, req: &GenerateRequest) -> QuotedeskResult<GenerateResponse> {
        self.chat(req)
            .await
            .map_err(|e| ExtractorError::new(e.into()).into())
    }

    fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
