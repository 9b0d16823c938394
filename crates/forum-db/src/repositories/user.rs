//! PostgreSQL implementation of UserRepository
//!
//! The `users` table belongs to the account subsystem; this repository only reads it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::error::DomainResult;
use forum_core::traits::UserRepository;

use super::error::{map_db_error, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn get_username_by_id(&self, id: &str) -> DomainResult<String> {
        sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| user_not_found(id))
    }
}
