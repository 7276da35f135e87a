//! Infrastructure layer for portfolio-relay
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod chat;
pub mod config;
pub mod error;
pub mod factory;
pub mod mail;
pub mod relay_client;

// Re-export commonly used types
pub use chat::{CannedChatBackend, HttpChatBackend};
pub use config::ConfigLoader;
pub use error::{AdapterError, Result};
pub use mail::SmtpMailTransport;
pub use relay_client::HttpRelayClient;
