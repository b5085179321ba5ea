use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::logins::dtos::{LoginEventResponseDto, LoginRequestDto};
use crate::features::logins::repositories::LoginRepository;

/// Service for recording guard check-ins
pub struct LoginService {
    repository: Arc<dyn LoginRepository>,
}

impl LoginService {
    pub fn new(repository: Arc<dyn LoginRepository>) -> Self {
        Self { repository }
    }

    /// Validate the username and persist a login event.
    ///
    /// Nothing is written when the username is missing or empty.
    pub async fn record_login(&self, dto: LoginRequestDto) -> Result<LoginEventResponseDto> {
        let username = dto
            .into_username()
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let event = self.repository.insert(&username).await?;

        tracing::info!("Login recorded: id={}, username={}", event.id, event.username);

        Ok(event.into())
    }
}
