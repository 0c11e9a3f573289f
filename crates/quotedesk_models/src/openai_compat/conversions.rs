//! Type conversions between Quotedesk and OpenAI formats.

use crate::openai_compat::{
    ChatContent, ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl, OpenAICompatError,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quotedesk_core::{GenerateRequest, GenerateResponse, Input, MediaSource, Output, Role};

const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Converts a Quotedesk GenerateRequest to OpenAI chat format.
///
/// A message holding a single text block is sent as a plain string; any
/// other message (several blocks, or an image) is sent as content parts.
/// Only user messages may carry images.
pub fn to_chat_request(
    req: &GenerateRequest,
    model: &str,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
) -> Result<ChatRequest, OpenAICompatError> {
    let mut messages = Vec::with_capacity(req.messages().len());

    for msg in req.messages() {
        let role = match msg.role() {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        };

        let content = match msg.content().as_slice() {
            [Input::Text(text)] => ChatContent::Text(text.clone()),
            inputs => {
                if *msg.role() != Role::User && inputs.iter().any(Input::is_image) {
                    return Err(OpenAICompatError::InvalidRequest(format!(
                        "Images are only accepted in user messages, found one in a {} message",
                        role
                    )));
                }
                ChatContent::Parts(inputs.iter().map(to_content_part).collect())
            }
        };

        messages.push(ChatMessage {
            role: role.to_string(),
            content,
        });
    }

    let mut builder = ChatRequest::builder();
    builder
        .model(req.model().clone().unwrap_or_else(|| model.to_string()))
        .messages(messages)
        .max_tokens(req.max_tokens().or(max_tokens))
        .temperature(req.temperature().or(temperature));

    builder
        .build()
        .map_err(|e| OpenAICompatError::Builder(format!("Failed to build request: {}", e)))
}

fn to_content_part(input: &Input) -> ContentPart {
    match input {
        Input::Text(text) => ContentPart::Text { text: text.clone() },
        Input::Image { mime, source } => {
            let mime = mime.as_deref().unwrap_or(DEFAULT_IMAGE_MIME);
            let url = match source {
                MediaSource::Url(url) => url.clone(),
                MediaSource::Base64(data) => format!("data:{};base64,{}", mime, data),
                MediaSource::Binary(bytes) => {
                    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
                }
            };
            ContentPart::ImageUrl {
                image_url: ImageUrl { url },
            }
        }
    }
}

/// Converts an OpenAI chat response to a Quotedesk GenerateResponse.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, OpenAICompatError> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| OpenAICompatError::ResponseParsing("No choices in response".to_string()))?;

    let content = choice.message.content.clone().ok_or_else(|| {
        OpenAICompatError::ResponseParsing(format!(
            "Choice has no text content (finish_reason: {})",
            choice.finish_reason.as_deref().unwrap_or("unknown")
        ))
    })?;

    Ok(GenerateResponse::new(vec![Output::Text(content)]))
}
