//! Relay Chat use case
//!
//! Forwards a visitor's chat request to the configured chat backend and hands
//! back whatever JSON the backend answered with.

use crate::ports::chat_backend::{ChatBackend, ChatBackendError};
use portfolio_domain::core::string::truncate;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum RelayChatError {
    /// The request body is not a chat request; nothing was forwarded
    #[error("Invalid chat request: {0}")]
    InvalidRequest(String),

    #[error("Chat backend error: {0}")]
    Backend(#[from] ChatBackendError),
}

/// Use case for the chat proxy endpoint
pub struct RelayChatUseCase {
    backend: Arc<dyn ChatBackend>,
}

impl RelayChatUseCase {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Forward `body` verbatim and return the backend's reply unchanged.
    ///
    /// The body must be a JSON object with a string `message`.
    pub async fn execute(&self, body: Value) -> Result<Value, RelayChatError> {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RelayChatError::InvalidRequest("expected a string 'message' field".to_string())
            })?;

        debug!("Relaying chat message: {}", truncate(message, 80));

        match self.backend.forward(&body).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                error!("Chat relay failed: {}", e);
                Err(RelayChatError::Backend(e))
            }
        }
    }
}
