//! Row-change actions decoded from an LLM reply.

use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Recognized values of the `action` field.
///
/// Tags are matched ignoring ASCII case, so `"Add"` and `"add"` both decode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    /// Append a row
    Add,
    /// Change one cell of the first matching row
    Update,
    /// Remove the first matching row
    Delete,
}

/// A validated row change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Append `row` after the last data row, values in header order.
    Add {
        /// Cell values aligned to the header
        row: Vec<String>,
    },
    /// Set `column` to `value` on the first row whose `search_col` matches.
    Update {
        /// Column searched for the target row
        search_col: String,
        /// Value the target row holds in `search_col`
        search_value: String,
        /// Column to change
        column: String,
        /// New cell value
        value: String,
    },
    /// Delete the first row whose `search_col` matches.
    Delete {
        /// Column searched for the target row
        search_col: String,
        /// Value the target row holds in `search_col`
        search_value: String,
    },
}

impl Action {
    /// The kind tag of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Add { .. } => ActionKind::Add,
            Action::Update { .. } => ActionKind::Update,
            Action::Delete { .. } => ActionKind::Delete,
        }
    }
}

/// One decoded element of an LLM reply.
///
/// Elements that cannot become an [`Action`] are kept so the executor can
/// report them alongside the applied ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    /// A well-formed action
    Known(Action),
    /// The `action` field named something other than add, update or delete
    Unknown {
        /// The unrecognized tag
        tag: String,
    },
    /// The element was not a usable action object
    Malformed {
        /// What was wrong with it
        reason: String,
    },
}

impl ActionRequest {
    /// Decodes one JSON element.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::malformed(format!("expected an object, got {}", value));
        };

        let tag = match object.get("action") {
            Some(Value::String(tag)) => tag.trim(),
            Some(other) => {
                return Self::malformed(format!("`action` must be a string, got {}", other));
            }
            None => return Self::malformed("missing `action` field"),
        };

        let Ok(kind) = ActionKind::from_str(tag) else {
            return Self::Unknown {
                tag: tag.to_string(),
            };
        };

        match decode(kind, object) {
            Ok(action) => Self::Known(action),
            Err(reason) => Self::malformed(format!("{}: {}", kind, reason)),
        }
    }

    fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl From<Action> for ActionRequest {
    fn from(action: Action) -> Self {
        Self::Known(action)
    }
}

fn decode(kind: ActionKind, object: &Map<String, Value>) -> Result<Action, String> {
    match kind {
        ActionKind::Add => {
            let row = match object.get("row") {
                Some(Value::Array(cells)) => cells
                    .iter()
                    .map(|cell| scalar(cell).ok_or_else(|| format!("unsupported cell {}", cell)))
                    .collect::<Result<Vec<_>, _>>()?,
                Some(other) => return Err(format!("`row` must be an array, got {}", other)),
                None => return Err("missing `row`".to_string()),
            };
            Ok(Action::Add { row })
        }
        ActionKind::Update => Ok(Action::Update {
            search_col: text_field(object, "search_col")?,
            search_value: scalar_field(object, "search_value")?,
            column: text_field(object, "column")?,
            value: scalar_field(object, "value")?,
        }),
        ActionKind::Delete => Ok(Action::Delete {
            search_col: text_field(object, "search_col")?,
            search_value: scalar_field(object, "search_value")?,
        }),
    }
}

/// Column names must be JSON strings.
fn text_field(object: &Map<String, Value>, name: &str) -> Result<String, String> {
    match object.get(name) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(format!("`{}` must be a string, got {}", name, other)),
        None => Err(format!("missing `{}`", name)),
    }
}

/// Cell values may be any JSON scalar.
fn scalar_field(object: &Map<String, Value>, name: &str) -> Result<String, String> {
    let value = object
        .get(name)
        .ok_or_else(|| format!("missing `{}`", name))?;
    scalar(value).ok_or_else(|| format!("`{}` must be a scalar, got {}", name, value))
}

/// Stringifies a JSON scalar; `null` reads as an empty cell.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
