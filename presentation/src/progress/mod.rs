//! Progress indicators for the terminal clients

mod spinner;

pub use spinner::WaitingIndicator;
