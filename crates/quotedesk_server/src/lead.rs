//! Lead-detail extraction from customer chat messages.

use quotedesk_actions::extract_structured_span;
use quotedesk_core::Input;
use quotedesk_error::{JsonError, QuotedeskResult};
use quotedesk_interface::IntentExtractor;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Instruction sent with every inbound message.
pub const LEAD_EXTRACTION_INSTRUCTIONS: &str = "You extract insurance lead details from a customer's chat message. \
Return ONLY a JSON object with exactly these keys: first_name, last_name, vin, driver_license, vehicle_year, vehicle_model. \
Use null for every value the message does not state. Never omit a key and never guess a value.";

/// Lead fields found in one message; `None` when the message did not state it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDetails {
    /// Customer first name
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    /// Customer last name
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    /// Vehicle identification number
    #[serde(default, deserialize_with = "lenient_text")]
    pub vin: Option<String>,
    /// Driver license number
    #[serde(default, deserialize_with = "lenient_text")]
    pub driver_license: Option<String>,
    /// Vehicle model year
    #[serde(default, deserialize_with = "lenient_text")]
    pub vehicle_year: Option<String>,
    /// Vehicle make and model
    #[serde(default, deserialize_with = "lenient_text")]
    pub vehicle_model: Option<String>,
}

impl LeadDetails {
    /// Decodes an extractor reply, fenced or bare.
    ///
    /// # Errors
    ///
    /// Fails when the reply holds no JSON object of lead fields.
    pub fn from_reply(reply: &str) -> QuotedeskResult<Self> {
        let span = extract_structured_span(reply).unwrap_or(reply);
        Ok(serde_json::from_str(span)
            .map_err(|e| JsonError::new(format!("Lead reply is not a lead object: {}", e)))?)
    }

    /// True when no field was found.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Asks the extractor for the lead details in one message.
///
/// # Errors
///
/// Fails when the extractor call fails or its reply cannot be decoded.
pub async fn extract_lead<E>(extractor: &E, message: &str) -> QuotedeskResult<LeadDetails>
where
    E: IntentExtractor + ?Sized,
{
    let reply = extractor
        .complete(
            LEAD_EXTRACTION_INSTRUCTIONS,
            vec![Input::Text(message.to_string())],
        )
        .await?;
    LeadDetails::from_reply(&reply)
}

/// Accepts strings, numbers and booleans; blanks and `null` read as `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    };
    Ok((!text.is_empty()).then_some(text))
}
