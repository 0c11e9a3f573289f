//! Request and response types for extractor calls.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generation request sent to the intent extractor.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// Conversation messages, system instructions first
    messages: Vec<Message>,
    /// Maximum tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model override
    model: Option<String>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// One output block produced by the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Text output
    Text(String),
}

/// The unified response object.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// Output blocks in order
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Creates a response from output blocks.
    pub fn new(outputs: Vec<Output>) -> Self {
        Self { outputs }
    }

    /// Concatenated text of every text output, or `None` when there is none.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .outputs
            .iter()
            .map(|output| match output {
                Output::Text(text) => text.as_str(),
            })
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }
}
