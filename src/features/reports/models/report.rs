use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::reports::dtos::PositionDto;

/// Database model for report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub area: String,
    pub store: String,
    pub guards: Vec<String>,
    pub report_type: String,
    pub description: String,
    pub handcuffs_used: Option<bool>,
    pub police_called: Option<bool>,
    pub patrol_number: Option<String>,
    pub position_lat: Option<f64>,
    pub position_lng: Option<f64>,
    pub reported_at: DateTime<Utc>,
}

impl Report {
    pub fn position(&self) -> Option<PositionDto> {
        PositionDto::from_parts(self.position_lat, self.position_lng)
    }
}

/// A validated report ready to be stored
#[derive(Debug, Clone)]
pub struct NewReport {
    pub area: String,
    pub store: String,
    pub guards: Vec<String>,
    pub report_type: String,
    pub description: String,
    pub handcuffs_used: Option<bool>,
    pub police_called: Option<bool>,
    pub patrol_number: Option<String>,
    pub position: Option<PositionDto>,
}
