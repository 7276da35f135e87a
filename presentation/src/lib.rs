//! Presentation layer for portfolio-relay
//!
//! This crate contains the actix-web relay server, CLI definitions, console
//! formatting and the interactive chat and contact clients.

pub mod chat;
pub mod cli;
pub mod contact;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{BackendArg, Cli, Command, DEFAULT_SERVER_URL, EnvironmentArg};
pub use contact::ContactPrompt;
pub use output::console::ConsoleFormatter;
pub use progress::WaitingIndicator;
pub use server::{ApiError, AppState};
