//! Chat backend port
//!
//! Defines the interface for the external conversational-AI service that the
//! chat relay forwards to.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while forwarding a chat message
///
/// The variants are kept apart for diagnostics only; the relay maps every
/// one of them to the same response.
#[derive(Error, Debug)]
pub enum ChatBackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error("Invalid response from upstream: {0}")]
    InvalidResponse(String),
}

/// Gateway to the chat-answering service
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Forward a chat request body and return the service's JSON reply unchanged
    async fn forward(&self, body: &Value) -> Result<Value, ChatBackendError>;

    /// Short description for startup logs
    fn describe(&self) -> String;
}
