//! Client for OpenAI-compatible chat completion APIs.
//!
//! Works against OpenAI itself and any provider exposing the same
//! `/chat/completions` contract, including image inputs sent as
//! `image_url` content parts.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use conversions::{from_chat_response, to_chat_request};
pub use dto::{
    ChatChoice, ChatContent, ChatMessage, ChatRequest, ChatResponse, ChatResponseMessage,
    ContentPart, ImageUrl, OpenAICompatError,
};
