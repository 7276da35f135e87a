//! Application-level configuration.
//!
//! [`AppConfig`] is built once at startup (see the infrastructure
//! `ConfigLoader`) and handed to the relay handlers as read-only state:
//!
//! - [`ServerConfig`] / [`LoggingConfig`]: process concerns (`[server]`, `[logging]`)
//! - [`ChatConfig`]: chat backend selection and URLs (`[chat]`)
//! - [`MailConfig`]: SMTP account and message defaults (`[mail]`)

mod app_config;
mod chat;
mod mail;
mod server;

pub use app_config::AppConfig;
pub use chat::{ChatBackendKind, ChatConfig};
pub use mail::MailConfig;
pub use server::{LoggingConfig, ServerConfig};
