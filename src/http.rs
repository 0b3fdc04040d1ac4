use std::future::Future;

use serde_json::Value;

/// Boxed failure raised while reading a response body.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The view of an HTTP response needed to describe it as an error.
///
/// Body readers consume the response, so at most one of `json` or `text`
/// is called per response.
pub trait NetworkResponse: Send {
    fn status(&self) -> u16;

    /// Look up a header by name, ignoring case. Returns `None` when the
    /// header is missing or the response carries no headers at all.
    fn header(&self, name: &str) -> Option<&str>;

    /// Opaque payload some HTTP clients attach next to the response.
    fn data(&self) -> Option<&Value> {
        None
    }

    fn json(self) -> impl Future<Output = Result<Value, BoxError>> + Send;

    fn text(self) -> impl Future<Output = Result<String, BoxError>> + Send;
}

/// A minimal in-memory HTTP response.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// `None` models a response object without a headers collection.
    pub headers: Option<Vec<(String, String)>>,
    pub body: Vec<u8>,
    pub data: Option<Value>,
}

impl HttpResponse {
    /// An empty response with the given status and an empty header list.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// A response with `Content-Type: application/json` and `body` serialized.
    pub fn from_json(status: u16, body: &Value) -> Self {
        Self::new(status)
            .with_header("Content-Type", "application/json")
            .with_body(body.to_string())
    }

    /// A response with `Content-Type: text/plain` and `body` as-is.
    pub fn from_text(status: u16, body: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Drop the headers collection entirely.
    pub fn without_headers(mut self) -> Self {
        self.headers = None;
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl NetworkResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    async fn json(self) -> Result<Value, BoxError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Invalid UTF-8 is replaced rather than rejected, like a browser or
    /// `reqwest` text read.
    async fn text(self) -> Result<String, BoxError> {
        Ok(String::from_utf8_lossy(&self.body).into_owned())
    }
}

#[cfg(feature = "reqwest-client")]
mod reqwest_impl {
    use serde_json::Value;

    use super::{BoxError, NetworkResponse};

    impl NetworkResponse for reqwest::Response {
        fn status(&self) -> u16 {
            reqwest::Response::status(self).as_u16()
        }

        fn header(&self, name: &str) -> Option<&str> {
            self.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
        }

        async fn json(self) -> Result<Value, BoxError> {
            Ok(reqwest::Response::json::<Value>(self).await?)
        }

        async fn text(self) -> Result<String, BoxError> {
            Ok(reqwest::Response::text(self).await?)
        }
    }
}
