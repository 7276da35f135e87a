//! Shared, read-only handler state

use portfolio_application::ports::chat_backend::ChatBackend;
use portfolio_application::ports::mail_transport::MailTransport;
use portfolio_application::{AppConfig, RelayChatUseCase, RelayContactUseCase};
use portfolio_domain::Showcase;
use std::sync::Arc;

/// Everything a request handler needs. Built once at startup.
pub struct AppState {
    pub relay_chat: RelayChatUseCase,
    pub relay_contact: RelayContactUseCase,
    pub showcase: Showcase,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        chat_backend: Arc<dyn ChatBackend>,
        mail_transport: Arc<dyn MailTransport>,
    ) -> Self {
        Self {
            relay_chat: RelayChatUseCase::new(chat_backend),
            relay_contact: RelayContactUseCase::new(mail_transport, config.mail.clone()),
            showcase: Showcase::default(),
        }
    }
}
