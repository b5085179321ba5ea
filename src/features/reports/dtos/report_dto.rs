use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{NewReport, Report};
use crate::shared::constants::MSG_REPORT_FIELDS_REQUIRED;

/// Map coordinates where the incident took place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PositionDto {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl PositionDto {
    /// `None` when neither coordinate is known
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        (lat.is_some() || lng.is_some()).then_some(Self { lat, lng })
    }
}

/// Request DTO for submitting an incident report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    #[validate(required, length(min = 1))]
    pub area: Option<String>,

    #[validate(required, length(min = 1))]
    pub store: Option<String>,

    /// Guards involved, in the order they were entered
    #[validate(required, length(min = 1))]
    pub guards: Option<Vec<String>>,

    /// Free-form category, e.g. "Grip" or "PL13§"
    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    pub report_type: Option<String>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,

    pub handcuffs_used: Option<bool>,
    pub police_called: Option<bool>,
    pub patrol_number: Option<String>,
    pub position: Option<PositionDto>,
}

impl TryFrom<CreateReportDto> for NewReport {
    type Error = &'static str;

    fn try_from(dto: CreateReportDto) -> Result<Self, Self::Error> {
        dto.validate().map_err(|_| MSG_REPORT_FIELDS_REQUIRED)?;

        match (dto.area, dto.store, dto.guards, dto.report_type, dto.description) {
            (Some(area), Some(store), Some(guards), Some(report_type), Some(description)) => {
                Ok(NewReport {
                    area,
                    store,
                    guards,
                    report_type,
                    description,
                    handcuffs_used: dto.handcuffs_used,
                    police_called: dto.police_called,
                    patrol_number: dto.patrol_number.filter(|p| !p.is_empty()),
                    position: dto.position.and_then(|p| PositionDto::from_parts(p.lat, p.lng)),
                })
            }
            _ => Err(MSG_REPORT_FIELDS_REQUIRED),
        }
    }
}

/// Response DTO for a stored report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub area: String,
    pub store: String,
    pub guards: Vec<String>,
    #[serde(rename = "type")]
    pub report_type: String,
    pub description: String,
    pub handcuffs_used: Option<bool>,
    pub police_called: Option<bool>,
    pub patrol_number: Option<String>,
    pub position: Option<PositionDto>,
    pub timestamp: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        let position = r.position();
        Self {
            id: r.id,
            area: r.area,
            store: r.store,
            guards: r.guards,
            report_type: r.report_type,
            description: r.description,
            handcuffs_used: r.handcuffs_used,
            police_called: r.police_called,
            patrol_number: r.patrol_number,
            position,
            timestamp: r.reported_at,
        }
    }
}
