//! Relay Contact use case
//!
//! Validates a contact submission, composes the notification email and
//! dispatches it through the mail transport exactly once.

use crate::config::MailConfig;
use crate::ports::mail_transport::{MailTransport, MailTransportError};
use portfolio_domain::{ContactSubmission, DomainError, OutgoingEmail};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum RelayContactError {
    /// A required field is missing; the transport was not called
    #[error("Invalid submission: {0}")]
    Validation(DomainError),

    /// Sender or recipient address in the configuration is unusable
    #[error("Mail configuration error: {0}")]
    Configuration(DomainError),

    #[error("Mail transport error: {0}")]
    Transport(#[from] MailTransportError),
}

impl RelayContactError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RelayContactError::Validation(_))
    }
}

/// Use case for the contact proxy endpoint
pub struct RelayContactUseCase {
    transport: Arc<dyn MailTransport>,
    mail: MailConfig,
}

impl RelayContactUseCase {
    pub fn new(transport: Arc<dyn MailTransport>, mail: MailConfig) -> Self {
        Self { transport, mail }
    }

    pub async fn execute(&self, submission: ContactSubmission) -> Result<(), RelayContactError> {
        submission
            .validate()
            .map_err(RelayContactError::Validation)?;

        let from = self.mail.sender().map_err(RelayContactError::Configuration)?;
        let to = self
            .mail
            .recipient()
            .map_err(RelayContactError::Configuration)?;
        let email = OutgoingEmail::from_submission(&submission, from, to, &self.mail.default_subject)
            .map_err(RelayContactError::Validation)?;

        if let Err(e) = self.transport.send(&email).await {
            error!("Contact relay failed: {}", e);
            return Err(e.into());
        }

        info!("Contact message relayed (subject: {})", email.subject);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use portfolio_domain::ContactField;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail: bool,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailTransportError> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail {
                Err(MailTransportError::Send("535 authentication failed".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn mail_config() -> MailConfig {
        MailConfig {
            user: "me@example.com".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_field_skips_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let use_case = RelayContactUseCase::new(transport.clone(), mail_config());

        let submission = ContactSubmission {
            name: Some("A".to_string()),
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let err = use_case.execute(submission).await.unwrap_err();

        assert!(err.is_validation());
        match err {
            RelayContactError::Validation(DomainError::MissingFields(fields)) => {
                assert_eq!(fields, vec![ContactField::Message]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_default_subject_and_fixed_addresses() {
        let transport = Arc::new(RecordingTransport::default());
        let use_case = RelayContactUseCase::new(transport.clone(), mail_config());

        use_case
            .execute(ContactSubmission::new("A", "a@x.com", "hi"))
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Contact Form Submission");
        assert_eq!(sent[0].to.address, "me@example.com");
        assert_eq!(sent[0].from.address, "me@example.com");
        assert_eq!(sent[0].from.name.as_deref(), Some("Portfolio Contact"));
        assert_eq!(sent[0].body, "From: A <a@x.com>\n\nhi");
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        let transport = Arc::new(RecordingTransport {
            fail: true,
            ..Default::default()
        });
        let use_case = RelayContactUseCase::new(transport.clone(), mail_config());

        let err = use_case
            .execute(ContactSubmission::new("A", "a@x.com", "hi").with_subject("Hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayContactError::Transport(_)));
        assert_eq!(transport.sent.lock().unwrap()[0].subject, "Hello");
    }

    #[tokio::test]
    async fn test_unconfigured_account_is_configuration_error() {
        let transport = Arc::new(RecordingTransport::default());
        let use_case = RelayContactUseCase::new(transport.clone(), MailConfig::default());

        let err = use_case
            .execute(ContactSubmission::new("A", "a@x.com", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayContactError::Configuration(_)));
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
