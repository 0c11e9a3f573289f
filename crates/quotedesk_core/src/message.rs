//! Message types for extractor conversations.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// A message sent to the extractor, possibly carrying an image.
///
/// # Examples
///
/// ```
/// use quotedesk_core::{Message, Role, Input};
///
/// let message = Message::new(Role::User, vec![Input::Text("Who is pending?".to_string())]);
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Message {
    /// The role of the message sender
    role: Role,
    /// The content of the message
    content: Vec<Input>,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: Vec<Input>) -> Self {
        Self { role, content }
    }

    /// Creates a system message holding a single text block.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, vec![Input::Text(text.into())])
    }

    /// Returns a builder for constructing a Message.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}
