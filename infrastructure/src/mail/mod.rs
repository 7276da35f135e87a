//! Mail transport adapters

mod smtp;

pub use smtp::SmtpMailTransport;
