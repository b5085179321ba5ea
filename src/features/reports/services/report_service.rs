use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{CreateReportDto, ReportResponseDto};
use crate::features::reports::models::{NewReport, Report};
use crate::features::reports::repositories::ReportRepository;

/// Service for report persistence
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a submitted report.
    ///
    /// Nothing is written if a required field is missing or empty.
    pub async fn record_report(&self, dto: CreateReportDto) -> Result<Report> {
        let new_report =
            NewReport::try_from(dto).map_err(|msg| AppError::Validation(msg.to_string()))?;

        let report = self.repository.insert(new_report).await?;

        tracing::info!(
            "Report recorded: id={}, type={}, store={}, guards={}",
            report.id,
            report.report_type,
            report.store,
            report.guards.len()
        );

        Ok(report)
    }

    /// All reports, most recent first
    pub async fn list_reports(&self) -> Result<Vec<ReportResponseDto>> {
        let reports = self.repository.list_newest_first().await?;
        Ok(reports.into_iter().map(ReportResponseDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{report_dto, FailingStore, InMemoryStore};

    #[tokio::test]
    async fn test_record_report_persists() {
        let store = Arc::new(InMemoryStore::default());
        let service = ReportService::new(store.clone());

        let report = service.record_report(report_dto("Alice")).await.unwrap();

        assert_eq!(report.guards, vec!["Alice"]);
        assert_eq!(store.report_count(), 1);
    }

    #[tokio::test]
    async fn test_record_report_with_empty_guards_writes_nothing() {
        let store = Arc::new(InMemoryStore::default());
        let service = ReportService::new(store.clone());
        let mut dto = report_dto("Alice");
        dto.guards = Some(vec![]);

        let result = service.record_report(dto).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.report_count(), 0);
    }

    #[tokio::test]
    async fn test_list_reports_is_newest_first() {
        let store = Arc::new(InMemoryStore::default());
        let service = ReportService::new(store.clone());

        for guard in ["Alice", "Bob", "Cecilia"] {
            service.record_report(report_dto(guard)).await.unwrap();
        }

        let reports = service.list_reports().await.unwrap();
        let guards: Vec<&str> = reports.iter().map(|r| r.guards[0].as_str()).collect();
        assert_eq!(guards, vec!["Cecilia", "Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_storage_failures_surface_as_database_errors() {
        let service = ReportService::new(Arc::new(FailingStore));

        assert!(matches!(
            service.record_report(report_dto("Alice")).await,
            Err(AppError::Database(_))
        ));
        assert!(matches!(
            service.list_reports().await,
            Err(AppError::Database(_))
        ));
    }
}
