use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{NewReport, Report};

/// Storage for incident reports
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a report, assigning its id and timestamp
    async fn insert(&self, report: NewReport) -> Result<Report>;

    /// All reports, most recent first
    async fn list_newest_first(&self) -> Result<Vec<Report>>;
}

/// PostgreSQL-backed report storage
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn insert(&self, report: NewReport) -> Result<Report> {
        let (lat, lng) = report
            .position
            .map(|p| (p.lat, p.lng))
            .unwrap_or((None, None));

        sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (
                id, area, store, guards, report_type, description,
                handcuffs_used, police_called, patrol_number,
                position_lat, position_lng
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING
                id, area, store, guards, report_type, description,
                handcuffs_used, police_called, patrol_number,
                position_lat, position_lng, reported_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&report.area)
        .bind(&report.store)
        .bind(&report.guards)
        .bind(&report.report_type)
        .bind(&report.description)
        .bind(report.handcuffs_used)
        .bind(report.police_called)
        .bind(&report.patrol_number)
        .bind(lat)
        .bind(lng)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_newest_first(&self) -> Result<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            r#"
            SELECT
                id, area, store, guards, report_type, description,
                handcuffs_used, police_called, patrol_number,
                position_lat, position_lng, reported_at
            FROM reports
            ORDER BY reported_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
