//! Core data types for the Quotedesk sheet assistant.
//!
//! This crate provides the table snapshot model shared by the row stores and
//! the action executor, plus the request/response types exchanged with the
//! intent extractor.

mod input;
mod media;
mod message;
mod observability;
mod request;
mod role;
mod table;

pub use input::Input;
pub use media::MediaSource;
pub use message::{Message, MessageBuilder};
pub use observability::init_tracing;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder, Output,
};
pub use role::Role;
pub use table::{FIRST_DATA_ROW, Header, Row, Table, cells_match};
