//! Contact mail configuration (`[mail]` section)

use portfolio_domain::{DomainError, Mailbox};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// SMTP relay host (implicit TLS)
    pub smtp_host: String,
    /// Override the SMTP port (default: the TLS submission port)
    pub smtp_port: Option<u16>,
    /// Account address; also the sender address
    pub user: String,
    /// Account password (an app password for Gmail)
    pub password: String,
    /// Display name of the sender
    pub sender_name: String,
    /// Where submissions are delivered; the account address when unset
    pub recipient: Option<String>,
    /// Subject used when the visitor leaves it blank
    pub default_subject: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: None,
            user: String::new(),
            password: String::new(),
            sender_name: "Portfolio Contact".to_string(),
            recipient: None,
            default_subject: "New Contact Form Submission".to_string(),
        }
    }
}

// Never print the password.
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("sender_name", &self.sender_name)
            .field("recipient", &self.recipient)
            .field("default_subject", &self.default_subject)
            .finish()
    }
}

impl MailConfig {
    pub fn has_credentials(&self) -> bool {
        !self.user.trim().is_empty() && !self.password.is_empty()
    }

    /// `"<sender_name>" <user>`
    pub fn sender(&self) -> Result<Mailbox, DomainError> {
        Mailbox::new(Some(self.sender_name.clone()), self.user.clone())
    }

    pub fn recipient(&self) -> Result<Mailbox, DomainError> {
        match self.recipient.as_deref() {
            Some(r) if !r.trim().is_empty() => Mailbox::address(r),
            _ => Mailbox::address(self.user.clone()),
        }
    }

    /// Copy with the password masked, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.password.is_empty() {
            copy.password = "********".to_string();
        }
        copy
    }
}
