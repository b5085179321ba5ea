use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{CreateReportDto, ReportResponseDto};
use crate::features::reports::services::{NotificationService, ReportService};
use crate::shared::constants::{MSG_REPORT_SAVED_MAIL_FAILED, MSG_REPORT_SENT};
use crate::shared::types::{ErrorResponse, MessageResponse};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub notification_service: Arc<NotificationService>,
}

/// Submit an incident report
///
/// The report is stored first and then mailed to the administrator. A mail
/// failure does not undo the write; the response is still 201 with a message
/// saying the mail could not be sent.
#[utoipa::path(
    post,
    path = "/api/report",
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report stored (mailed or not)", body = MessageResponse),
        (status = 400, description = "Required field missing", body = ErrorResponse),
        (status = 500, description = "Report could not be stored", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(state): State<ReportState>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let report = state.report_service.record_report(dto).await?;

    let message = match state.notification_service.send_report_email(&report).await {
        Ok(()) => MSG_REPORT_SENT,
        Err(e) => {
            tracing::error!("Report {} saved but mail failed: {}", report.id, e);
            MSG_REPORT_SAVED_MAIL_FAILED
        }
    };

    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<ReportResponseDto>),
        (status = 500, description = "Reports could not be read", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<ReportState>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = state.report_service.list_reports().await?;
    Ok(Json(reports))
}
