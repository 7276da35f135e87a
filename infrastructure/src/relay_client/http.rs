//! HTTP client for the portfolio relay endpoints
//!
//! Used by the terminal chat and contact clients in place of the page's
//! `fetch` calls.

use crate::error::Result;
use async_trait::async_trait;
use portfolio_application::ports::relay_client::{ChatEndpoint, ContactEndpoint, EndpointError};
use portfolio_domain::ContactSubmission;
use serde_json::{Value, json};

/// Talks to a running portfolio server
pub struct HttpRelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a relay client with an existing HTTP client (for testing)
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json(&self, path: &str, body: &Value) -> std::result::Result<Value, EndpointError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await;

        if !status.is_success() {
            let message = body
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string));
            return Err(EndpointError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        body.map_err(|e| EndpointError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ChatEndpoint for HttpRelayClient {
    async fn send_message(&self, message: &str) -> std::result::Result<String, EndpointError> {
        let body = self.post_json("/api/chat", &json!({ "message": message })).await?;
        body.get("reply")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| EndpointError::InvalidResponse("missing 'reply' field".to_string()))
    }
}

#[async_trait]
impl ContactEndpoint for HttpRelayClient {
    async fn submit(&self, submission: &ContactSubmission) -> std::result::Result<(), EndpointError> {
        let payload = serde_json::to_value(submission)
            .map_err(|e| EndpointError::InvalidResponse(e.to_string()))?;
        let body = self.post_json("/api/contact", &payload).await?;

        if body.get("success").and_then(Value::as_bool) == Some(true) {
            Ok(())
        } else {
            Err(EndpointError::InvalidResponse(
                "missing 'success' flag".to_string(),
            ))
        }
    }
}
