//! Terminal contact form

mod prompt;

pub use prompt::ContactPrompt;
