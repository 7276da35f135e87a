//! Domain error types

use crate::contact::submission::ContactField;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing fields: {}", join_fields(.0))]
    MissingFields(Vec<ContactField>),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

impl DomainError {
    /// Check if this error was caused by user input rather than configuration
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::MissingFields(_))
    }
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let error = DomainError::MissingFields(vec![ContactField::Name, ContactField::Message]);
        assert_eq!(error.to_string(), "Missing fields: name, message");
    }

    #[test]
    fn test_is_validation_check() {
        assert!(DomainError::MissingFields(vec![ContactField::Email]).is_validation());
        assert!(!DomainError::InvalidAddress("nope".to_string()).is_validation());
    }
}
