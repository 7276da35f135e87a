//! Contact submission value object

use crate::core::error::DomainError;
use crate::core::string::is_blank;
use serde::{Deserialize, Serialize};

/// Field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Fields that must be present for a submission to be sent
    pub const REQUIRED: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact form payload as it travels over the wire.
///
/// Every field is optional at the serde level so that a request with absent
/// fields still deserializes and can be rejected with a proper validation
/// error instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: None,
            message: Some(message.into()),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    fn field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Subject => self.subject.as_deref(),
            ContactField::Message => self.message.as_deref(),
        }
    }

    /// Required fields that are absent, empty or whitespace only
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|f| self.field(*f).is_none_or(is_blank))
            .collect()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingFields(missing))
        }
    }

    /// Subject to use for the email, ignoring a blank one
    pub fn subject_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.subject.as_deref() {
            Some(s) if !is_blank(s) => s,
            _ => default,
        }
    }
}
