//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod environment;
mod validation;

pub use environment::Environment;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
