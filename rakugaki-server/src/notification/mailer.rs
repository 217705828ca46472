//! Outbound email transport
//!
//! [`SmtpMailer`] sends through an SMTP relay using Lettre's Tokio
//! transport. Tests substitute their own [`Mailer`] implementations.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::NotificationError;
use crate::core::EmailConfig;

/// A fully rendered HTML email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Something that can deliver an [`OutgoingEmail`]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError>;
}

/// SMTP mailer using Lettre.
///
/// # Configuration
///
/// - `smtp_host`: relay address (e.g., "smtp.gmail.com")
/// - `smtp_port`: relay port, implicit TLS (usually 465)
/// - `user` / `password`: SMTP authentication
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the SMTP transport.
    ///
    /// No connection is opened here; the first send connects.
    ///
    /// # Errors
    ///
    /// Returns error if the relay host cannot be used for TLS.
    pub fn new(config: &EmailConfig) -> Result<Self, NotificationError> {
        let credentials = Credentials::new(config.user.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| NotificationError::Transport(format!("SMTP relay error: {e}")))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { transport })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| NotificationError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(parse_mailbox(&email.from)?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body)
            .map_err(|e| NotificationError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mailbox() {
        assert!(parse_mailbox("taro@example.com").is_ok());

        let err = parse_mailbox("not an address").unwrap_err();
        assert!(matches!(err, NotificationError::InvalidAddress { ref address, .. } if address == "not an address"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_fails_before_connecting() {
        let mailer = SmtpMailer::new(&EmailConfig {
            user: "info@rakugaki.com".to_string(),
            password: "secret".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 465,
        })
        .unwrap();

        let result = mailer
            .send(OutgoingEmail {
                from: "info@rakugaki.com".to_string(),
                to: "nobody".to_string(),
                subject: "Test".to_string(),
                html_body: "<p>hi</p>".to_string(),
            })
            .await;

        assert!(matches!(result, Err(NotificationError::InvalidAddress { .. })));
    }
}
