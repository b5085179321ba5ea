//! In-memory fakes for handler and service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::config::MailConfig;
use crate::core::error::{AppError, Result};
use crate::features::logins::models::LoginEvent;
use crate::features::logins::LoginRepository;
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::{NewReport, Report};
use crate::features::reports::ReportRepository;
use crate::modules::mail::{MailError, Mailer, OutgoingMail};

/// Stores logins and reports in memory
#[derive(Default)]
pub struct InMemoryStore {
    logins: Mutex<Vec<LoginEvent>>,
    reports: Mutex<Vec<Report>>,
}

impl InMemoryStore {
    pub fn login_count(&self) -> usize {
        self.logins.lock().unwrap().len()
    }

    pub fn report_count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

#[async_trait]
impl LoginRepository for InMemoryStore {
    async fn insert(&self, username: &str) -> Result<LoginEvent> {
        let event = LoginEvent {
            id: Uuid::now_v7(),
            username: username.to_string(),
            login_time: Utc::now(),
        };
        self.logins.lock().unwrap().push(event.clone());
        Ok(event)
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    async fn insert(&self, report: NewReport) -> Result<Report> {
        let stored = Report {
            id: Uuid::now_v7(),
            area: report.area,
            store: report.store,
            guards: report.guards,
            report_type: report.report_type,
            description: report.description,
            handcuffs_used: report.handcuffs_used,
            police_called: report.police_called,
            patrol_number: report.patrol_number,
            position_lat: report.position.and_then(|p| p.lat),
            position_lng: report.position.and_then(|p| p.lng),
            reported_at: Utc::now(),
        };
        self.reports.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> Result<Vec<Report>> {
        let reports = self.reports.lock().unwrap();
        // Insertion order breaks timestamp ties, like the id tiebreak in SQL
        let mut indexed: Vec<(usize, Report)> = reports.iter().cloned().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| {
            b.reported_at
                .cmp(&a.reported_at)
                .then_with(|| ib.cmp(ia))
        });
        Ok(indexed.into_iter().map(|(_, r)| r).collect())
    }
}

/// Every call fails as if the database were unreachable
pub struct FailingStore;

#[async_trait]
impl LoginRepository for FailingStore {
    async fn insert(&self, _username: &str) -> Result<LoginEvent> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[async_trait]
impl ReportRepository for FailingStore {
    async fn insert(&self, _report: NewReport) -> Result<Report> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_newest_first(&self) -> Result<Vec<Report>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Captures outgoing mail, or rejects everything when built with `failing()`
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn verify(&self) -> std::result::Result<(), MailError> {
        if self.fail {
            return Err(MailError::Transport("535 authentication failed".to_string()));
        }
        Ok(())
    }

    async fn send(&self, mail: OutgoingMail) -> std::result::Result<(), MailError> {
        if self.fail {
            return Err(MailError::Transport("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

pub fn mail_config() -> MailConfig {
    MailConfig {
        host: Some("smtp.example.com".to_string()),
        port: 465,
        secure: true,
        username: Some("reports@example.com".to_string()),
        password: Some("secret".to_string()),
        sender_name: "Väktarrapport".to_string(),
        admin_email: Some("admin@example.com".to_string()),
    }
}

/// A valid submission from a single guard
pub fn report_dto(guard: &str) -> CreateReportDto {
    CreateReportDto {
        area: Some("North".to_string()),
        store: Some("Store5".to_string()),
        guards: Some(vec![guard.to_string()]),
        report_type: Some("Grip".to_string()),
        description: Some("Shoplifting detained".to_string()),
        handcuffs_used: None,
        police_called: None,
        patrol_number: None,
        position: None,
    }
}

/// A stored report with only the required fields set
pub fn sample_report(guards: &[&str]) -> Report {
    Report {
        id: Uuid::now_v7(),
        area: "North".to_string(),
        store: "Store5".to_string(),
        guards: guards.iter().map(|g| g.to_string()).collect(),
        report_type: "Grip".to_string(),
        description: "Shoplifting detained".to_string(),
        handcuffs_used: None,
        police_called: None,
        patrol_number: None,
        position_lat: None,
        position_lng: None,
        reported_at: Utc::now(),
    }
}
