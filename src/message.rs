use serde_json::Value;

/// Whether `value` is an object with a string `message` field.
pub fn is_error_with_message(value: &Value) -> bool {
    own_message(value).is_some()
}

/// Obtain a human-readable message from an arbitrary thrown value.
///
/// For error-like values the message of a nested `cause` wins over the
/// outer message, as long as the cause is itself an object with a string
/// `message`. Anything else is stringified, with `null` becoming `""`.
pub fn get_error_message(value: &Value) -> String {
    match own_message(value) {
        Some(message) => value
            .get("cause")
            .and_then(own_message)
            .unwrap_or(message)
            .to_string(),
        None => stringify(value),
    }
}

/// Best-effort string form of any value. Never fails.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Numbers, booleans, arrays and objects: compact JSON.
        other => other.to_string(),
    }
}

fn own_message(value: &Value) -> Option<&str> {
    value.as_object()?.get("message")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn error_value_is_error_like() {
        assert!(is_error_with_message(&Error::new("test").to_value()));
        assert!(is_error_with_message(&json!({ "message": "" })));
    }

    #[test]
    fn non_error_like_values() {
        assert!(!is_error_with_message(&json!("test")));
        assert!(!is_error_with_message(&json!(42)));
        assert!(!is_error_with_message(&Value::Null));
        assert!(!is_error_with_message(&json!({ "test": "test" })));
        assert!(!is_error_with_message(&json!({ "message": 7 })));
        assert!(!is_error_with_message(&json!(["message"])));
    }

    #[test]
    fn returns_own_message_without_cause() {
        assert_eq!(get_error_message(&json!({ "message": "outer" })), "outer");
    }

    #[test]
    fn prefers_cause_message() {
        let value = Error::with_cause("outer", json!({ "message": "inner" })).to_value();
        assert_eq!(get_error_message(&value), "inner");
    }

    #[test]
    fn ignores_cause_without_string_message() {
        let cases = [
            json!({ "message": "outer", "cause": "a string cause" }),
            json!({ "message": "outer", "cause": { "message": 500 } }),
            json!({ "message": "outer", "cause": { "code": "E" } }),
            json!({ "message": "outer", "cause": null }),
        ];
        for value in &cases {
            assert_eq!(get_error_message(value), "outer", "input: {value}");
        }
    }

    #[test]
    fn stringifies_non_error_like_values() {
        assert_eq!(get_error_message(&Value::Null), "");
        assert_eq!(get_error_message(&json!("plain string")), "plain string");
        assert_eq!(get_error_message(&json!(404)), "404");
        assert_eq!(get_error_message(&json!(false)), "false");
        assert_eq!(get_error_message(&json!({ "test": "test" })), r#"{"test":"test"}"#);
        assert_eq!(get_error_message(&json!([1, "a"])), r#"[1,"a"]"#);
    }
}
