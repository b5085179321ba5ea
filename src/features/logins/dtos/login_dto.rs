use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::constants::MSG_USERNAME_REQUIRED;

/// Request DTO for a guard check-in
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
}

impl LoginRequestDto {
    /// Validated username, or the message shown to the caller
    pub fn into_username(self) -> Result<String, &'static str> {
        self.validate().map_err(|_| MSG_USERNAME_REQUIRED)?;
        self.username.ok_or(MSG_USERNAME_REQUIRED)
    }
}

/// A recorded login event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginEventResponseDto {
    pub id: Uuid,
    pub username: String,
    pub login_time: DateTime<Utc>,
}

/// Response DTO for `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub user: LoginEventResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_username_rejects_missing_and_empty() {
        assert_eq!(
            LoginRequestDto { username: None }.into_username(),
            Err(MSG_USERNAME_REQUIRED)
        );
        assert_eq!(
            LoginRequestDto {
                username: Some(String::new())
            }
            .into_username(),
            Err(MSG_USERNAME_REQUIRED)
        );
    }

    #[test]
    fn test_into_username_keeps_value() {
        let dto = LoginRequestDto {
            username: Some("kalle".to_string()),
        };
        assert_eq!(dto.into_username(), Ok("kalle".to_string()));
    }

    #[test]
    fn test_response_uses_camel_case() {
        let dto = LoginEventResponseDto {
            id: Uuid::nil(),
            username: "kalle".to_string(),
            login_time: Utc::now(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("loginTime").is_some());
        assert!(json.get("login_time").is_none());
    }
}
