//! Adapter selection from configuration

use crate::chat::{CannedChatBackend, HttpChatBackend};
use crate::error::Result;
use crate::mail::SmtpMailTransport;
use portfolio_application::ports::chat_backend::ChatBackend;
use portfolio_application::ports::mail_transport::MailTransport;
use portfolio_application::{AppConfig, ChatBackendKind};
use std::sync::Arc;

/// Build the chat backend selected by `chat.backend`
pub fn chat_backend(config: &AppConfig) -> Result<Arc<dyn ChatBackend>> {
    let backend: Arc<dyn ChatBackend> = match config.chat.backend {
        ChatBackendKind::Remote => Arc::new(HttpChatBackend::new(config.chat_base_url())?),
        ChatBackendKind::Canned => Arc::new(CannedChatBackend::new()),
    };
    Ok(backend)
}

/// Build the SMTP transport for the `[mail]` account
pub fn mail_transport(config: &AppConfig) -> Result<Arc<dyn MailTransport>> {
    Ok(Arc::new(SmtpMailTransport::new(&config.mail)?))
}
