use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::{NotificationService, ReportService};

/// Create routes for the reports feature
pub fn routes(
    report_service: Arc<ReportService>,
    notification_service: Arc<NotificationService>,
) -> Router {
    let state = ReportState {
        report_service,
        notification_service,
    };

    Router::new()
        .route("/api/report", post(handlers::create_report))
        .route("/api/reports", get(handlers::list_reports))
        .with_state(state)
}
