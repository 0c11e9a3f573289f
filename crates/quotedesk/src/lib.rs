//! Quotedesk: manage a quotes spreadsheet in natural language.
//!
//! The console assistant reads the sheet, asks an LLM what the operator
//! wants and applies the add/update/delete actions it returns. A companion
//! webhook listener extracts lead details from inbound chat messages.
//!
//! This crate re-exports the workspace crates and holds the settings loader
//! and the console loop used by the `quotedesk` binary.

#![warn(missing_docs)]

mod config;
pub mod console;

pub use config::{DEFAULT_CONFIG_FILE, EnvOverrides, QuotedeskConfig};

pub use quotedesk_actions::{
    Action, ActionExecutor, ActionKind, ActionOutcome, ActionRequest, ParsedReply, SheetAssistant,
    TurnResult, extract_structured_span, parse_reply, table_instructions,
};
pub use quotedesk_core::{
    GenerateRequest, GenerateResponse, Header, Input, MediaSource, Message, Output, Role, Row,
    Table, init_tracing,
};
pub use quotedesk_error::{
    ConfigError, ExtractorError, ExtractorErrorKind, QuotedeskError, QuotedeskErrorKind,
    QuotedeskResult, SheetError, SheetErrorKind,
};
pub use quotedesk_interface::{IntentExtractor, RowStore};
pub use quotedesk_models::{ExtractorConfig, OpenAICompatibleClient};
pub use quotedesk_server::{LeadDetails, WebhookConfig, create_router, serve};
pub use quotedesk_sheets::{GoogleSheetsStore, InMemoryRowStore, SheetConfig};
