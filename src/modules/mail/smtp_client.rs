//! SMTP mail client
//!
//! Sends plain-text messages through an authenticated SMTP relay.
//!
//! Uses the lettre crate with its tokio transport and rustls.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::MailConfig;
use crate::shared::templates::TemplateError;

/// Errors raised while composing or delivering mail
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Mail is not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to compose message: {0}")]
    Compose(String),

    #[error("Failed to render mail template: {0}")]
    Template(#[from] TemplateError),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// A fully addressed plain-text message
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub from: Mailbox,
    pub to: Mailbox,
    pub subject: String,
    pub body: String,
}

/// Outbound mail delivery
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Check that the transport is reachable and accepts our credentials
    async fn verify(&self) -> Result<(), MailError>;

    /// Deliver one message, without retries
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// SMTP-backed mailer
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpMailer {
    /// Build the transport from configuration.
    ///
    /// No connection is opened here; use [`Mailer::verify`] to check the relay.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let host = required(&config.host, "EMAIL_HOST")?;
        let credentials = Credentials::new(
            required(&config.username, "EMAIL_USER")?.to_string(),
            required(&config.password, "EMAIL_PASSWORD")?.to_string(),
        );

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| MailError::Transport(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };

        let transport = builder
            .port(config.port)
            .credentials(credentials)
            .build();

        info!(
            "SMTP mailer configured for {}:{} (tls={})",
            host, config.port, config.secure
        );

        Ok(Self {
            transport,
            host: host.to_string(),
            port: config.port,
        })
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, MailError> {
    value
        .as_deref()
        .ok_or_else(|| MailError::NotConfigured(format!("{} is not set", name)))
}

/// Mailer standing in for an SMTP transport that could not be built.
///
/// Every call fails with the original reason so report submissions still
/// persist and answer with the mail-failure message.
pub struct UnavailableMailer {
    reason: String,
}

impl UnavailableMailer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Mailer for UnavailableMailer {
    async fn verify(&self) -> Result<(), MailError> {
        Err(MailError::NotConfigured(self.reason.clone()))
    }

    async fn send(&self, _mail: OutgoingMail) -> Result<(), MailError> {
        Err(MailError::NotConfigured(self.reason.clone()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn verify(&self) -> Result<(), MailError> {
        let connected = self
            .transport
            .test_connection()
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        if connected {
            Ok(())
        } else {
            Err(MailError::Transport(format!(
                "SMTP server {}:{} did not accept the connection",
                self.host, self.port
            )))
        }
    }

    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(mail.from)
            .to(mail.to)
            .subject(mail.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)
            .map_err(|e| MailError::Compose(e.to_string()))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        debug!("SMTP server answered with code {}", response.code());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secure: bool) -> MailConfig {
        MailConfig {
            host: Some("smtp.example.com".to_string()),
            port: 465,
            secure,
            username: Some("reports@example.com".to_string()),
            password: Some("secret".to_string()),
            sender_name: "Väktarrapport".to_string(),
            admin_email: Some("admin@example.com".to_string()),
        }
    }

    fn mail() -> OutgoingMail {
        OutgoingMail {
            from: "reports@example.com".parse().unwrap(),
            to: "admin@example.com".parse().unwrap(),
            subject: "Ny rapport".to_string(),
            body: "Beskrivning".to_string(),
        }
    }

    #[test]
    fn test_new_builds_tls_and_plain_transports() {
        assert!(SmtpMailer::new(&config(true)).is_ok());
        assert!(SmtpMailer::new(&config(false)).is_ok());
    }

    #[test]
    fn test_new_requires_host_and_credentials() {
        let mut missing_host = config(true);
        missing_host.host = None;
        let err = SmtpMailer::new(&missing_host).err().unwrap();
        assert!(matches!(err, MailError::NotConfigured(ref m) if m.contains("EMAIL_HOST")));

        let mut missing_password = config(true);
        missing_password.password = None;
        let err = SmtpMailer::new(&missing_password).err().unwrap();
        assert!(matches!(err, MailError::NotConfigured(ref m) if m.contains("EMAIL_PASSWORD")));
    }

    #[tokio::test]
    async fn test_unavailable_mailer_fails_every_call() {
        let mailer = UnavailableMailer::new("EMAIL_HOST is not set");

        assert!(matches!(
            mailer.verify().await,
            Err(MailError::NotConfigured(_))
        ));
        let err = mailer.send(mail()).await.unwrap_err();
        assert_eq!(err.to_string(), "Mail is not configured: EMAIL_HOST is not set");
    }

    #[test]
    fn test_invalid_address_maps_to_mail_error() {
        let err: MailError = "not-an-address"
            .parse::<lettre::Address>()
            .unwrap_err()
            .into();
        assert!(matches!(err, MailError::Address(_)));
    }
}
