//! Intent extractor backends for Quotedesk.
//!
//! The extractor is any chat-completion model reachable through the
//! OpenAI wire format. [`OpenAICompatibleClient`] implements
//! [`IntentExtractor`](quotedesk_interface::IntentExtractor) on top of it.

#![warn(missing_docs)]

mod config;
pub mod openai_compat;

pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, ExtractorConfig, ExtractorConfigBuilder};
pub use openai_compat::{OpenAICompatError, OpenAICompatibleClient};
