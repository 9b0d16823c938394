//! PostgreSQL implementation of CommentRepository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use forum_core::entities::{Comment, CreateComment, CreatedComment};
use forum_core::error::{DomainError, DomainResult};
use forum_core::traits::CommentRepository;
use forum_core::value_objects::{EntityKind, IdGenerator};

use crate::mappers::CommentInsert;
use crate::models::{CommentModel, CreatedCommentModel, OwnerModel};

use super::error::{comment_not_found, comment_not_in_thread, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(thread_id = %comment.thread_id))]
    async fn add_comment(&self, comment: &CreateComment) -> DomainResult<CreatedComment> {
        let insert = CommentInsert::new(self.id_generator.next_id(EntityKind::Comment), comment);

        let row = sqlx::query_as::<_, CreatedCommentModel>(
            r"
            INSERT INTO comments (id, content, thread_id, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            ",
        )
        .bind(&insert.id)
        .bind(insert.content)
        .bind(insert.thread_id)
        .bind(insert.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(comment_id = %row.id, "Comment created");
        CreatedComment::try_from(row)
    }

    #[instrument(skip(self))]
    async fn verify_comment_exists(&self, id: &str) -> DomainResult<()> {
        let found = sqlx::query_scalar::<_, String>("SELECT id FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        found.map(|_| ()).ok_or_else(|| comment_not_found(id))
    }

    #[instrument(skip(self))]
    async fn verify_comment_in_thread(&self, comment_id: &str, thread_id: &str) -> DomainResult<()> {
        let found = sqlx::query_scalar::<_, String>(
            "SELECT id FROM comments WHERE id = $1 AND thread_id = $2",
        )
        .bind(comment_id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        found
            .map(|_| ())
            .ok_or_else(|| comment_not_in_thread(comment_id, thread_id))
    }

    #[instrument(skip(self))]
    async fn verify_comment_owner(&self, id: &str, owner: &str) -> DomainResult<()> {
        let row = sqlx::query_as::<_, OwnerModel>("SELECT id, owner FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| comment_not_found(id))?;

        if !row.is_owned_by(owner) {
            warn!(comment_id = %id, "Comment ownership check failed");
            return Err(DomainError::NotCommentOwner);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete_comment(&self, id: &str) -> DomainResult<()> {
        let result = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        info!(comment_id = %id, "Comment soft-deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_thread_id(&self, thread_id: &str) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, thread_id, owner, date, is_deleted
            FROM comments
            WHERE thread_id = $1
            ORDER BY date ASC, id ASC
            ",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}
