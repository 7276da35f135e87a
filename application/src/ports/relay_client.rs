//! Relay endpoint ports used by the client-side controllers
//!
//! A browser page would call the relays with `fetch`; here the controllers
//! depend on these traits and an HTTP adapter implements them.

use async_trait::async_trait;
use portfolio_domain::ContactSubmission;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// The request never got a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The relay answered with an error status
    #[error("Request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The relay answered with a body the client could not use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl EndpointError {
    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            EndpointError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Client view of the chat relay (`POST /api/chat`)
#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    /// Send `{ "message": ... }` and return the `reply` text
    async fn send_message(&self, message: &str) -> Result<String, EndpointError>;
}

/// Client view of the contact relay (`POST /api/contact`)
#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), EndpointError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_rejections() {
        let rejected = EndpointError::Rejected {
            status: 500,
            message: Some("Failed to send message".to_string()),
        };
        assert_eq!(rejected.server_message(), Some("Failed to send message"));
        assert_eq!(
            rejected.to_string(),
            "Request rejected with status 500: Failed to send message"
        );
        assert!(EndpointError::Transport("refused".into()).server_message().is_none());
    }
}
