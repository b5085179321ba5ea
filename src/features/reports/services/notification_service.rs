use std::sync::Arc;

use chrono::{DateTime, Local};
use lettre::message::Mailbox;
use serde::Serialize;

use crate::core::config::MailConfig;
use crate::features::reports::models::Report;
use crate::modules::mail::{MailError, Mailer, OutgoingMail};
use crate::shared::constants::{
    FLAG_NO, FLAG_YES, PATROL_NUMBER_MISSING, POSITION_UNKNOWN, REPORT_SUBJECT_PREFIX,
    UNKNOWN_GUARD,
};
use crate::shared::templates::{render_template, TemplateError, REPORT_NOTIFICATION};

/// Subject and body of a report notification
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEmail {
    pub subject: String,
    pub body: String,
}

#[derive(Serialize)]
struct ReportEmailContext<'a> {
    guards: String,
    store: &'a str,
    area: &'a str,
    report_type: &'a str,
    handcuffs_used: &'static str,
    police_called: &'static str,
    patrol_number: &'a str,
    lat: String,
    lng: String,
    sent_at: String,
    description: &'a str,
}

fn yes_no(flag: Option<bool>) -> &'static str {
    if flag.unwrap_or(false) {
        FLAG_YES
    } else {
        FLAG_NO
    }
}

fn coordinate(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| POSITION_UNKNOWN.to_string())
}

/// Render the administrator mail for a report.
///
/// `sent_at` is the time of sending, not the stored report timestamp.
pub fn compose_report_email(
    report: &Report,
    sent_at: DateTime<Local>,
) -> Result<ReportEmail, TemplateError> {
    let sender = report
        .guards
        .first()
        .map(String::as_str)
        .filter(|g| !g.is_empty())
        .unwrap_or(UNKNOWN_GUARD);

    let ctx = ReportEmailContext {
        guards: report.guards.join(", "),
        store: &report.store,
        area: &report.area,
        report_type: &report.report_type,
        handcuffs_used: yes_no(report.handcuffs_used),
        police_called: yes_no(report.police_called),
        patrol_number: report
            .patrol_number
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(PATROL_NUMBER_MISSING),
        lat: coordinate(report.position_lat),
        lng: coordinate(report.position_lng),
        sent_at: sent_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        description: &report.description,
    };

    Ok(ReportEmail {
        subject: format!("{} {}", REPORT_SUBJECT_PREFIX, sender),
        body: render_template(REPORT_NOTIFICATION, &ctx)?,
    })
}

/// Sender and recipient of report notifications
struct Addressing {
    from: Mailbox,
    admin: Mailbox,
}

impl Addressing {
    fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let username = config
            .username
            .as_deref()
            .ok_or_else(|| MailError::NotConfigured("EMAIL_USER is not set".to_string()))?;
        let admin_email = config
            .admin_email
            .as_deref()
            .ok_or_else(|| MailError::NotConfigured("ADMIN_EMAIL is not set".to_string()))?;

        Ok(Self {
            from: Mailbox::new(Some(config.sender_name.clone()), username.parse()?),
            admin: Mailbox::new(None, admin_email.parse()?),
        })
    }
}

/// Service delivering report notifications to the administrator
pub struct NotificationService {
    mailer: Arc<dyn Mailer>,
    // Bad addresses fail each send instead of the service
    addressing: Result<Addressing, String>,
}

impl NotificationService {
    pub fn new(mailer: Arc<dyn Mailer>, config: &MailConfig) -> Self {
        let addressing = Addressing::from_config(config).map_err(|e| {
            tracing::error!("Report emails disabled, invalid mail addressing: {}", e);
            match e {
                MailError::NotConfigured(reason) => reason,
                other => other.to_string(),
            }
        });

        Self { mailer, addressing }
    }

    /// Mail one report to the administrator, without retries
    pub async fn send_report_email(&self, report: &Report) -> Result<(), MailError> {
        let addressing = self
            .addressing
            .as_ref()
            .map_err(|reason| MailError::NotConfigured(reason.clone()))?;
        let email = compose_report_email(report, Local::now())?;

        self.mailer
            .send(OutgoingMail {
                from: addressing.from.clone(),
                to: addressing.admin.clone(),
                subject: email.subject,
                body: email.body,
            })
            .await?;

        tracing::info!("Report {} mailed to {}", report.id, addressing.admin.email);

        Ok(())
    }

    /// Check the mail transport once and log the outcome
    pub async fn verify_transport(&self) {
        match self.mailer.verify().await {
            Ok(()) => tracing::info!("Mail transport verified"),
            Err(e) => tracing::error!("Mail transport verification failed: {}", e),
        }
    }
}
