use serde_json::Value;

use crate::Error;
use crate::http::{BoxError, NetworkResponse};
use crate::message::stringify;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Describe a failed HTTP response as a single [`Error`].
///
/// The body is interpreted by content type:
/// - `application/json` -> `error` field, else `message`, else "Unknown error"
/// - `text/plain` -> the raw text
/// - anything else (or no headers) -> the response `data`, if it is a string
///
/// Never fails: a body that cannot be read yields `"{prefix} HTTP {status} error"`.
/// The JSON branch has no space before `error:` while the others do; the
/// formats are kept as-is for compatibility with existing consumers.
pub async fn create_error_from_network_request(
    response: impl NetworkResponse,
    prefix: Option<&str>,
) -> Error {
    let status = response.status();
    let prefix = match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}: "),
        _ => String::new(),
    };

    match describe(response, status, &prefix).await {
        Ok(message) => Error::new(message),
        Err(err) => {
            log::debug!("could not read error body (HTTP {status}): {err}");
            Error::new(format!("{prefix} HTTP {status} error"))
        }
    }
}

async fn describe(
    response: impl NetworkResponse,
    status: u16,
    prefix: &str,
) -> Result<String, BoxError> {
    let content_type = response.header("content-type").map(str::to_ascii_lowercase);

    match content_type.as_deref() {
        Some(ct) if ct.contains("application/json") => {
            let json = response.json().await?;
            let error = json_error_text(&json);
            Ok(format!("{prefix}error: {error}, statusCode: {status}"))
        }
        Some(ct) if ct.contains("text/plain") => {
            let text = response.text().await?;
            Ok(format!("{prefix} error: {text}, statusCode: {status}"))
        }
        _ => {
            let error = response
                .data()
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ERROR);
            Ok(format!("{prefix} error: {error}, statusCode: {status}"))
        }
    }
}

/// First non-null of `error` and `message`.
fn json_error_text(json: &Value) -> String {
    ["error", "message"]
        .into_iter()
        .filter_map(|key| json.get(key))
        .find(|value| !value.is_null())
        .map_or_else(|| UNKNOWN_ERROR.to_string(), stringify)
}
