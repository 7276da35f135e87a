//! HTTP chat backend

use crate::error::Result;
use async_trait::async_trait;
use portfolio_application::ports::chat_backend::{ChatBackend, ChatBackendError};
use serde_json::Value;
use tracing::{debug, info};

/// Path of the chat endpoint on the external service
const CHAT_PATH: &str = "/api/chat";

/// Forwards chat requests to the external chat service over HTTP
pub struct HttpChatBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatBackend {
    /// Create a backend for the service at `base_url`.
    ///
    /// No request timeout is set; the transport default applies.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a backend with an existing client (for testing)
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH);
        info!("HttpChatBackend forwarding to {}", endpoint);
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn forward(&self, body: &Value) -> std::result::Result<Value, ChatBackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| ChatBackendError::Connection(e.to_string()))?;

        let status = response.status();
        debug!("Chat backend answered with {}", status);
        if !status.is_success() {
            return Err(ChatBackendError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ChatBackendError::InvalidResponse(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("remote ({})", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer) -> HttpChatBackend {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpChatBackend::with_client(client, &format!("{}/", server.uri()))
    }

    #[tokio::test]
    async fn test_forwards_body_and_returns_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({"message": "hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "hello"})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = backend(&server).forward(&json!({"message": "hi"})).await.unwrap();
        assert_eq!(reply, json!({"reply": "hello"}));
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "busy"})))
            .mount(&server)
            .await;

        let err = backend(&server)
            .forward(&json!({"message": "hi"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatBackendError::UpstreamStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = backend(&server)
            .forward(&json!({"message": "hi"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ChatBackendError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_is_connection_error() {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        // Port 9 (discard) on localhost is not listening in test environments
        let backend = HttpChatBackend::with_client(client, "http://127.0.0.1:9");

        let err = backend.forward(&json!({"message": "hi"})).await.unwrap_err();
        assert!(matches!(err, ChatBackendError::Connection(_)));
    }
}
