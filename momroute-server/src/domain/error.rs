//! Domain error types.
//!
//! These errors describe input that is structurally unusable. Data that is
//! merely incomplete (a missing duration, an unnamed stop) is tolerated by
//! the consumers and never reaches this type.

/// Structurally invalid input handed to the outage normalizer or the scorer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// The top-level value was not a sequence
    #[error("expected an array of {what}, found {found}")]
    NotASequence {
        what: &'static str,
        found: &'static str,
    },

    /// An element of a sequence could not be interpreted at all
    #[error("malformed {what} at index {index}: {message}")]
    MalformedElement {
        what: &'static str,
        index: usize,
        message: String,
    },

    /// Scoring parameters outside their valid range
    #[error("invalid scoring config: {0}")]
    InvalidConfig(&'static str),
}

impl InvalidInput {
    /// Name the JSON type of a value, for error messages.
    pub fn json_kind(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_display() {
        let err = InvalidInput::NotASequence {
            what: "outage records",
            found: "object",
        };
        assert_eq!(
            err.to_string(),
            "expected an array of outage records, found object"
        );

        let err = InvalidInput::MalformedElement {
            what: "route",
            index: 2,
            message: "expected a map".into(),
        };
        assert_eq!(err.to_string(), "malformed route at index 2: expected a map");

        let err = InvalidInput::InvalidConfig("max walk minutes must be finite");
        assert_eq!(
            err.to_string(),
            "invalid scoring config: max walk minutes must be finite"
        );
    }

    #[test]
    fn json_kind_names() {
        assert_eq!(InvalidInput::json_kind(&json!(null)), "null");
        assert_eq!(InvalidInput::json_kind(&json!(true)), "boolean");
        assert_eq!(InvalidInput::json_kind(&json!(1.5)), "number");
        assert_eq!(InvalidInput::json_kind(&json!("x")), "string");
        assert_eq!(InvalidInput::json_kind(&json!([])), "array");
        assert_eq!(InvalidInput::json_kind(&json!({})), "object");
    }
}
