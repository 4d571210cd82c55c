//! Uniform handling of the server's `error` values.
//!
//! The server reports errors either as a plain message or as a mapping from field name to
//! message. [`ErrorPayload`] makes that explicit and [`normalize`] turns any payload into the
//! ordered lines a page shows, so no caller ever inspects the raw shape itself.

use serde_json::Value;

use crate::display::display_value;

/// An `error` value returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorPayload {
    #[default]
    None,
    Message(String),
    /// Field name to message, in the order the server sent them.
    FieldErrors(Vec<(String, String)>),
}

impl ErrorPayload {
    /// Classify a raw JSON `error` value.
    ///
    /// Non-string field messages and unexpected top-level shapes keep their JSON text.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::None,
            Value::String(message) => Self::Message(message.clone()),
            Value::Object(fields) => Self::FieldErrors(
                fields
                    .iter()
                    .map(|(field, message)| (field.clone(), display_value(message)))
                    .collect(),
            ),
            other => Self::Message(other.to_string()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Shorthand for [`normalize`].
    pub fn lines(&self) -> Vec<String> {
        normalize(self)
    }
}

/// Lines to display for an error payload, one per message.
pub fn normalize(payload: &ErrorPayload) -> Vec<String> {
    match payload {
        ErrorPayload::None => Vec::new(),
        ErrorPayload::Message(message) => vec![message.clone()],
        ErrorPayload::FieldErrors(fields) => fields
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect(),
    }
}
