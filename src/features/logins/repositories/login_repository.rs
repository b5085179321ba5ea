use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::logins::models::LoginEvent;

/// Storage for login events
#[async_trait]
pub trait LoginRepository: Send + Sync {
    /// Persist one login event, assigning its id and login time
    async fn insert(&self, username: &str) -> Result<LoginEvent>;
}

/// PostgreSQL-backed login event storage
pub struct PgLoginRepository {
    pool: PgPool,
}

impl PgLoginRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoginRepository for PgLoginRepository {
    async fn insert(&self, username: &str) -> Result<LoginEvent> {
        sqlx::query_as::<_, LoginEvent>(
            r#"
            INSERT INTO login_events (id, username)
            VALUES ($1, $2)
            RETURNING id, username, login_time
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
