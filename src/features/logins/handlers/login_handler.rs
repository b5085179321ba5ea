use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::logins::dtos::{LoginRequestDto, LoginResponseDto};
use crate::features::logins::services::LoginService;
use crate::shared::constants::MSG_LOGIN_RECORDED;
use crate::shared::types::ErrorResponse;

/// Record a guard login
///
/// Stores one login event per call and echoes the created record.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequestDto,
    responses(
        (status = 201, description = "Login recorded", body = LoginResponseDto),
        (status = 400, description = "Username missing", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "logins"
)]
pub async fn login(
    State(service): State<Arc<LoginService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<(StatusCode, Json<LoginResponseDto>)> {
    let user = service.record_login(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponseDto {
            message: MSG_LOGIN_RECORDED.to_string(),
            user,
        }),
    ))
}
