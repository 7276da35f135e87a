//! Error types for adapter construction

use thiserror::Error;

/// Result type alias for adapter setup
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Errors that can occur while building an adapter
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to configure SMTP transport: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
