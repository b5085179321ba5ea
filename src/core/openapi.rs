use utoipa::{Modify, OpenApi};

use crate::features::logins::{dtos as logins_dtos, handlers as logins_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::shared::types::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Logins
        logins_handlers::login,
        // Reports
        reports_handlers::create_report,
        reports_handlers::list_reports,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            // Logins
            logins_dtos::LoginRequestDto,
            logins_dtos::LoginEventResponseDto,
            logins_dtos::LoginResponseDto,
            // Reports
            reports_dtos::PositionDto,
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
        )
    ),
    tags(
        (name = "logins", description = "Guard check-ins"),
        (name = "reports", description = "Incident reports"),
    ),
    info(
        title = "Guard Report API",
        version = "0.1.0",
        description = "Incident reporting for security guards",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
