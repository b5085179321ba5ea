//! Outbound mail module
//!
//! Provides the `Mailer` seam used by report notifications, its SMTP
//! implementation and a fallback used when SMTP is not configured.

mod smtp_client;

pub use smtp_client::{MailError, Mailer, OutgoingMail, SmtpMailer, UnavailableMailer};
