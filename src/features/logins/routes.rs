use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::logins::handlers;
use crate::features::logins::services::LoginService;

/// Create routes for the logins feature
pub fn routes(service: Arc<LoginService>) -> Router {
    Router::new()
        .route("/api/login", post(handlers::login))
        .with_state(service)
}
