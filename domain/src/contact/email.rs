//! Outgoing email value objects

use super::submission::ContactSubmission;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// An email address with an optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    pub name: Option<String>,
    pub address: String,
}

impl Mailbox {
    /// Create a mailbox, checking the address has a local part and a domain
    pub fn new(name: Option<String>, address: impl Into<String>) -> Result<Self, DomainError> {
        let address = address.into().trim().to_string();
        let valid = matches!(
            address.split_once('@'),
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        );
        if !valid {
            return Err(DomainError::InvalidAddress(address));
        }
        Ok(Self {
            name: name.filter(|n| !n.trim().is_empty()),
            address,
        })
    }

    pub fn address(address: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(None, address)
    }
}

impl std::fmt::Display for Mailbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "\"{}\" <{}>", name, self.address),
            None => write!(f, "{}", self.address),
        }
    }
}

/// The email the contact relay hands to the mail transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: Mailbox,
    pub to: Mailbox,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    /// Compose the notification email for a contact submission.
    ///
    /// The submission is validated first; a missing required field is an error.
    pub fn from_submission(
        submission: &ContactSubmission,
        from: Mailbox,
        to: Mailbox,
        default_subject: &str,
    ) -> Result<Self, DomainError> {
        submission.validate()?;

        let name = submission.name.as_deref().unwrap_or_default();
        let email = submission.email.as_deref().unwrap_or_default();
        let message = submission.message.as_deref().unwrap_or_default();

        Ok(Self {
            from,
            to,
            subject: submission.subject_or(default_subject).to_string(),
            body: format!("From: {} <{}>\n\n{}", name, email, message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Mailbox {
        Mailbox::new(Some("Portfolio Contact".to_string()), "me@example.com").unwrap()
    }

    #[test]
    fn test_mailbox_display() {
        assert_eq!(owner().to_string(), "\"Portfolio Contact\" <me@example.com>");
        assert_eq!(
            Mailbox::address("me@example.com").unwrap().to_string(),
            "me@example.com"
        );
    }

    #[test]
    fn test_mailbox_rejects_bad_address() {
        assert!(Mailbox::address("").is_err());
        assert!(Mailbox::address("no-at-sign").is_err());
        assert!(Mailbox::address("@example.com").is_err());
        assert!(Mailbox::address("a@b@c").is_err());
    }

    #[test]
    fn test_compose_uses_default_subject() {
        let submission = ContactSubmission::new("A", "a@x.com", "hi");
        let email = OutgoingEmail::from_submission(
            &submission,
            owner(),
            Mailbox::address("me@example.com").unwrap(),
            "New Contact Form Submission",
        )
        .unwrap();

        assert_eq!(email.subject, "New Contact Form Submission");
        assert_eq!(email.body, "From: A <a@x.com>\n\nhi");
        assert_eq!(email.to.address, "me@example.com");
    }

    #[test]
    fn test_compose_rejects_incomplete_submission() {
        let submission = ContactSubmission {
            name: Some("A".to_string()),
            ..Default::default()
        };
        let result = OutgoingEmail::from_submission(&submission, owner(), owner(), "Subject");
        assert!(matches!(result, Err(DomainError::MissingFields(_))));
    }
}
