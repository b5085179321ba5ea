use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::logins::dtos::LoginEventResponseDto;

/// Database model for a login event
#[derive(Debug, Clone, FromRow)]
pub struct LoginEvent {
    pub id: Uuid,
    pub username: String,
    pub login_time: DateTime<Utc>,
}

impl From<LoginEvent> for LoginEventResponseDto {
    fn from(e: LoginEvent) -> Self {
        Self {
            id: e.id,
            username: e.username,
            login_time: e.login_time,
        }
    }
}
