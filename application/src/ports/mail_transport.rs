//! Mail transport port
//!
//! Defines how the contact relay dispatches an email.

use async_trait::async_trait;
use portfolio_domain::OutgoingEmail;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailTransportError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Failed to send message: {0}")]
    Send(String),
}

/// Outbound email transport
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Dispatch one email
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailTransportError>;
}
