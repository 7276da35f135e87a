//! Application layer for portfolio-relay
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AppConfig, ChatBackendKind, ChatConfig, LoggingConfig, MailConfig, ServerConfig};
pub use ports::{
    chat_backend::{ChatBackend, ChatBackendError},
    mail_transport::{MailTransport, MailTransportError},
    relay_client::{ChatEndpoint, ContactEndpoint, EndpointError},
};
pub use use_cases::chat_widget::ChatWidgetController;
pub use use_cases::contact_form::ContactFormController;
pub use use_cases::relay_chat::{RelayChatError, RelayChatUseCase};
pub use use_cases::relay_contact::{RelayContactError, RelayContactUseCase};
