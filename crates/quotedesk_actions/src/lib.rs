//! Structured-action flow for the Quotedesk sheet assistant.
//!
//! An LLM reply is either prose or JSON describing row changes. This crate
//! turns the reply into [`ActionRequest`]s ([`parse_reply`]), applies them to
//! a [`RowStore`](quotedesk_interface::RowStore) one at a time
//! ([`ActionExecutor`]) and drives a whole console turn ([`SheetAssistant`]).
//!
//! # Example
//!
//! ```
//! use quotedesk_actions::{ActionRequest, ParsedReply, parse_reply};
//!
//! let reply = "Sure!\n```json\n{\"action\": \"delete\", \"search_col\": \"Name\", \"search_value\": \"Ana\"}\n```";
//! match parse_reply(reply) {
//!     ParsedReply::Actions(actions) => assert!(matches!(actions[0], ActionRequest::Known(_))),
//!     ParsedReply::Answer(_) => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

mod action;
mod assistant;
mod executor;
mod outcome;
mod parser;
mod prompt;

pub use action::{Action, ActionKind, ActionRequest};
pub use assistant::{SheetAssistant, TurnResult};
pub use executor::ActionExecutor;
pub use outcome::ActionOutcome;
pub use parser::{ParsedReply, extract_structured_span, parse_reply};
pub use prompt::table_instructions;
