//! SMTP mail transport (lettre)

use crate::error::Result;
use async_trait::async_trait;
use lettre::message::{Mailbox as LettreMailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use portfolio_application::MailConfig;
use portfolio_application::ports::mail_transport::{MailTransport, MailTransportError};
use portfolio_domain::{Mailbox, OutgoingEmail};
use tracing::{debug, info};

/// Sends contact emails through an authenticated SMTP relay
pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Build a pooled transport for `config.smtp_host` using the account credentials
    pub fn new(config: &MailConfig) -> Result<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ));
        if let Some(port) = config.smtp_port {
            builder = builder.port(port);
        }

        info!("SMTP transport configured for {}", config.smtp_host);
        Ok(Self {
            mailer: builder.build(),
        })
    }
}

fn to_lettre_mailbox(mailbox: &Mailbox) -> std::result::Result<LettreMailbox, MailTransportError> {
    let address: Address = mailbox
        .address
        .parse()
        .map_err(|e| MailTransportError::InvalidAddress(format!("{}: {}", mailbox.address, e)))?;
    Ok(LettreMailbox::new(mailbox.name.clone(), address))
}

/// Convert the domain email into a plain-text MIME message
pub(crate) fn build_message(email: &OutgoingEmail) -> std::result::Result<Message, MailTransportError> {
    Message::builder()
        .from(to_lettre_mailbox(&email.from)?)
        .to(to_lettre_mailbox(&email.to)?)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailTransportError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: &OutgoingEmail) -> std::result::Result<(), MailTransportError> {
        let message = build_message(email)?;
        let response = self
            .mailer
            .send(message)
            .await
            .map_err(|e| MailTransportError::Send(e.to_string()))?;
        debug!("SMTP accepted message: {:?}", response.code());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: Mailbox::new(Some("Portfolio Contact".to_string()), "me@example.com").unwrap(),
            to: Mailbox::address("me@example.com").unwrap(),
            subject: "New Contact Form Submission".to_string(),
            body: "From: A <a@x.com>\n\nhi".to_string(),
        }
    }

    #[test]
    fn test_build_message_headers() {
        let message = build_message(&email()).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("Portfolio Contact"));
        assert!(formatted.contains("<me@example.com>"));
        assert!(formatted.contains("Subject: New Contact Form Submission"));
        assert!(formatted.contains("From: A <a@x.com>"));
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let mut email = email();
        email.to.address = "not an address@".to_string();
        assert!(matches!(
            build_message(&email),
            Err(MailTransportError::InvalidAddress(_))
        ));
    }
}
