//! Splits an LLM reply into structured actions or a prose answer.

use crate::ActionRequest;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

/// First fenced `json` block, or a bare span from the first `{`/`[` to the
/// last `}`/`]`. Leftmost match wins, so whichever appears first is used.
static STRUCTURED_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```json\s*(?P<fenced>.*?)\s*```|(?P<bare>[\{\[].*[\}\]])")
        .expect("structured span pattern is valid")
});

/// What an LLM reply means for the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    /// One or more row changes, in reply order (never empty)
    Actions(Vec<ActionRequest>),
    /// Informational text, shown to the operator verbatim
    Answer(String),
}

/// Locates the structured part of a reply, if any.
///
/// The bare-bracket fallback is greedy and may overreach on unusual
/// nesting; decoding then fails and the reply reads as prose.
pub fn extract_structured_span(text: &str) -> Option<&str> {
    let captures = STRUCTURED_SPAN.captures(text)?;
    captures
        .name("fenced")
        .or_else(|| captures.name("bare"))
        .map(|span| span.as_str())
}

/// Interprets an LLM reply.
///
/// A single JSON object counts as a one-element batch. Replies without a
/// decodable span, and decoded data where no element carries an `action`
/// field, are answers holding the full original text.
pub fn parse_reply(text: &str) -> ParsedReply {
    let Some(span) = extract_structured_span(text) else {
        return ParsedReply::Answer(text.to_string());
    };

    let elements = match serde_json::from_str::<Value>(span) {
        Ok(Value::Array(items)) => items,
        Ok(single) => vec![single],
        Err(e) => {
            debug!(error = %e, "Structured span did not decode, treating reply as text");
            return ParsedReply::Answer(text.to_string());
        }
    };

    if !elements.iter().any(|element| element.get("action").is_some()) {
        debug!(elements = elements.len(), "Decoded data carries no actions");
        return ParsedReply::Answer(text.to_string());
    }

    let requests: Vec<ActionRequest> = elements.iter().map(ActionRequest::from_value).collect();
    debug!(actions = requests.len(), "Parsed actions from reply");
    ParsedReply::Actions(requests)
}
