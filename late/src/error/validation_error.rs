//! Field-level validation failures.

use serde_json::{Map, Value};
use thiserror::Error;

/// A 400/422 response carrying per-field messages.
///
/// The field map is kept exactly as the server sent it: each value is either
/// a string or an array of strings.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Validation failed: {message}")]
pub struct ValidationError {
    /// HTTP status code (400 or 422).
    pub status: u16,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable code, `validation_error` unless the body says otherwise.
    pub code: String,
    /// Field name -> message(s), verbatim.
    pub fields: Map<String, Value>,
    /// Parsed response body.
    pub body: Value,
}

impl ValidationError {
    /// Messages reported for one field, in server order.
    ///
    /// ```
    /// use late::error::ValidationError;
    /// use serde_json::json;
    ///
    /// let fields = json!({ "content": ["too long", "contains banned hashtag"], "title": "required" });
    /// let err = ValidationError {
    ///     status: 422,
    ///     message: "Invalid post".to_string(),
    ///     code: "validation_error".to_string(),
    ///     fields: fields.as_object().unwrap().clone(),
    ///     body: json!({}),
    /// };
    ///
    /// assert_eq!(err.messages_for("content"), ["too long", "contains banned hashtag"]);
    /// assert_eq!(err.messages_for("title"), ["required"]);
    /// assert!(err.messages_for("media").is_empty());
    /// ```
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        match self.fields.get(field) {
            Some(Value::String(message)) => vec![message.as_str()],
            Some(Value::Array(messages)) => messages.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Names of the fields that failed, in server order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// `true` when every value is a string or an array of strings.
pub(crate) fn is_field_map(map: &Map<String, Value>) -> bool {
    !map.is_empty()
        && map.values().all(|value| match value {
            Value::String(_) => true,
            Value::Array(items) => items.iter().all(Value::is_string),
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn accepts_strings_and_string_arrays() {
        assert!(is_field_map(&object(json!({ "a": "x", "b": ["y", "z"] }))));
    }

    #[test]
    fn rejects_nested_objects_and_numbers() {
        assert!(!is_field_map(&object(json!({ "a": { "b": "c" } }))));
        assert!(!is_field_map(&object(json!({ "a": 1 }))));
        assert!(!is_field_map(&object(json!({ "a": ["x", 2] }))));
    }

    #[test]
    fn rejects_empty_maps() {
        assert!(!is_field_map(&Map::new()));
    }
}
