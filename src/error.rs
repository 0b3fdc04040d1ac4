use serde_json::Value;

use crate::oauth::OAuthErrorMessage;
use crate::shield::ShieldError;

/// A synthesized error carrying a human-readable message and, optionally,
/// the original value it was derived from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    /// The originating value, kept for error reporting. Never validated.
    cause: Option<Value>,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Build an error with a readable message and the underlying cause
    /// attached for downstream reporting.
    pub fn with_cause(message: impl Into<String>, cause: Value) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// An error whose message is one of the known OAuth messages.
    pub fn oauth(kind: OAuthErrorMessage) -> Self {
        Self::new(kind.as_str())
    }

    /// An error whose message is one of the known shield messages.
    pub fn shield(kind: ShieldError) -> Self {
        Self::new(kind.as_str())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Value> {
        self.cause.as_ref()
    }

    /// Render as a thrown value: `{"message": ..}` plus `"cause"` when set.
    pub fn to_value(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(ref cause) = self.cause {
            object.insert("cause".to_string(), cause.clone());
        }
        Value::Object(object)
    }
}

impl From<&Error> for Value {
    fn from(error: &Error) -> Self {
        error.to_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_is_the_message() {
        let err = Error::new("Failed to fetch");
        assert_eq!(err.to_string(), "Failed to fetch");
        assert!(err.cause().is_none());
    }

    #[test]
    fn with_cause_keeps_cause_unvalidated() {
        let err = Error::with_cause("Readable message", json!(42));
        assert_eq!(err.message(), "Readable message");
        assert_eq!(err.cause(), Some(&json!(42)));
    }

    #[test]
    fn to_value_without_cause_has_only_message() {
        let value = Error::new("boom").to_value();
        assert_eq!(value, json!({ "message": "boom" }));
    }

    #[test]
    fn to_value_includes_cause() {
        let cause = json!({ "message": "inner", "code": -32603 });
        let value = Value::from(&Error::with_cause("outer", cause.clone()));
        assert_eq!(value, json!({ "message": "outer", "cause": cause }));
    }

    #[test]
    fn constructors_from_known_messages() {
        assert_eq!(
            Error::oauth(OAuthErrorMessage::InvalidOAuthState).message(),
            "Invalid OAuth state"
        );
        assert_eq!(
            Error::shield(ShieldError::TabActionFailed).message(),
            "tab action failed"
        );
    }
}
