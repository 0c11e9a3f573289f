//! Inbound event payloads (WhatsApp Cloud API shape).
//!
//! Only the fields the listener reads are modelled; everything else in the
//! delivery is ignored.

use serde::Deserialize;

/// Top-level webhook delivery.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEvent {
    /// Source object, `whatsapp_business_account` for WhatsApp
    #[serde(default)]
    pub object: Option<String>,
    /// Batched entries
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// One account entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    /// Changes reported for the account
    #[serde(default)]
    pub changes: Vec<Change>,
}

/// One change notification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Change {
    /// Subscribed field, `messages` for chat traffic
    #[serde(default)]
    pub field: Option<String>,
    /// Change payload
    #[serde(default)]
    pub value: ChangeValue,
}

/// Payload of a change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeValue {
    /// Messages received
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

/// A received message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundMessage {
    /// Sender phone number
    #[serde(default)]
    pub from: Option<String>,
    /// Platform message id
    #[serde(default)]
    pub id: Option<String>,
    /// Message type (`text`, `image`, ...)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Text content, present for `text` messages
    #[serde(default)]
    pub text: Option<TextBody>,
}

/// Text message body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextBody {
    /// Message text
    #[serde(default)]
    pub body: String,
}

/// A text message ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    /// Sender, empty when the platform omitted it
    pub from: String,
    /// Message text
    pub body: String,
}

impl WebhookEvent {
    /// Every non-empty text message in the delivery, in order.
    pub fn text_messages(&self) -> Vec<TextMessage> {
        self.entry
            .iter()
            .flat_map(|entry| &entry.changes)
            .flat_map(|change| &change.value.messages)
            .filter(|message| message.kind.as_deref() == Some("text"))
            .filter_map(|message| {
                let body = message.text.as_ref()?.body.trim();
                (!body.is_empty()).then(|| TextMessage {
                    from: message.from.clone().unwrap_or_default(),
                    body: body.to_string(),
                })
            })
            .collect()
    }
}
