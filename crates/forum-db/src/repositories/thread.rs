//! PostgreSQL implementation of ThreadRepository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use forum_core::entities::{CreateThread, CreatedThread, Thread};
use forum_core::error::DomainResult;
use forum_core::traits::ThreadRepository;
use forum_core::value_objects::{EntityKind, IdGenerator};

use crate::mappers::ThreadInsert;
use crate::models::{CreatedThreadModel, ThreadModel};

use super::error::{map_db_error, thread_not_found};

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self, thread), fields(owner = %thread.owner))]
    async fn add_thread(&self, thread: &CreateThread) -> DomainResult<CreatedThread> {
        let insert = ThreadInsert::new(self.id_generator.next_id(EntityKind::Thread), thread);

        let row = sqlx::query_as::<_, CreatedThreadModel>(
            r"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, owner
            ",
        )
        .bind(&insert.id)
        .bind(insert.title)
        .bind(insert.body)
        .bind(insert.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(thread_id = %row.id, "Thread created");
        CreatedThread::try_from(row)
    }

    #[instrument(skip(self))]
    async fn verify_thread_exists(&self, id: &str) -> DomainResult<()> {
        let found = sqlx::query_scalar::<_, String>("SELECT id FROM threads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        found.map(|_| ()).ok_or_else(|| thread_not_found(id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> DomainResult<Thread> {
        let result = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT id, title, body, owner, date
            FROM threads
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Thread::from).ok_or_else(|| thread_not_found(id))
    }
}
