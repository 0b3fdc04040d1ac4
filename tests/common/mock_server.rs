use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock API built on `wiremock` that serves failed responses with
/// configurable bodies and content types at `GET /api`.
pub struct MockErrorServer {
    server: MockServer,
}

impl MockErrorServer {
    /// Start a new mock server on a random available port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full URL of the failing endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Respond with the given status and JSON body.
    pub async fn mock_json_error(&self, status: u16, body: serde_json::Value) {
        self.mount(ResponseTemplate::new(status).set_body_json(&body))
            .await;
    }

    /// Respond with the given status and a `text/plain` body.
    pub async fn mock_text_error(&self, status: u16, body: &str) {
        self.mount(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/plain; charset=utf-8"),
        )
        .await;
    }

    /// Respond with the given status and raw bytes under `content_type`.
    pub async fn mock_raw_error(&self, status: u16, content_type: &str, body: &[u8]) {
        self.mount(ResponseTemplate::new(status).set_body_raw(body.to_vec(), content_type))
            .await;
    }

    async fn mount(&self, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }
}
