//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The relay side talks to a [`chat_backend::ChatBackend`] and a
//! [`mail_transport::MailTransport`]; the client controllers talk to the
//! relays through [`relay_client::ChatEndpoint`] and
//! [`relay_client::ContactEndpoint`].

pub mod chat_backend;
pub mod mail_transport;
pub mod relay_client;
