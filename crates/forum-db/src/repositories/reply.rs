//! PostgreSQL implementation of ReplyRepository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use forum_core::entities::{CreateReply, CreatedReply, Reply};
use forum_core::error::{DomainError, DomainResult};
use forum_core::traits::ReplyRepository;
use forum_core::value_objects::{EntityKind, IdGenerator};

use crate::mappers::ReplyInsert;
use crate::models::{CreatedReplyModel, OwnerModel, ReplyModel};

use super::error::{map_db_error, reply_not_found};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }

    fn check_owner(row: &OwnerModel, owner: &str) -> DomainResult<()> {
        if row.is_owned_by(owner) {
            Ok(())
        } else {
            warn!(reply_id = %row.id, "Reply ownership check failed");
            Err(DomainError::NotReplyOwner)
        }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self, reply), fields(comment_id = %reply.comment_id))]
    async fn add_reply(&self, reply: &CreateReply) -> DomainResult<CreatedReply> {
        let insert = ReplyInsert::new(self.id_generator.next_id(EntityKind::Reply), reply);

        let row = sqlx::query_as::<_, CreatedReplyModel>(
            r"
            INSERT INTO replies (id, content, comment_id, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            ",
        )
        .bind(&insert.id)
        .bind(insert.content)
        .bind(insert.comment_id)
        .bind(insert.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        info!(reply_id = %row.id, "Reply created");
        CreatedReply::try_from(row)
    }

    #[instrument(skip(self))]
    async fn verify_reply_owner(&self, id: &str, owner: &str) -> DomainResult<()> {
        let row = sqlx::query_as::<_, OwnerModel>("SELECT id, owner FROM replies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| reply_not_found(id))?;

        Self::check_owner(&row, owner)
    }

    #[instrument(skip(self))]
    async fn verify_reply_in_comment_and_owner(
        &self,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> DomainResult<()> {
        let row = sqlx::query_as::<_, OwnerModel>(
            "SELECT id, owner FROM replies WHERE id = $1 AND comment_id = $2",
        )
        .bind(reply_id)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| reply_not_found(reply_id))?;

        Self::check_owner(&row, owner)
    }

    #[instrument(skip(self))]
    async fn soft_delete_reply(&self, id: &str) -> DomainResult<()> {
        let result = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(id));
        }

        info!(reply_id = %id, "Reply soft-deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_comment_id(&self, comment_id: &str) -> DomainResult<Vec<Reply>> {
        let rows = sqlx::query_as::<_, ReplyModel>(
            r"
            SELECT id, content, comment_id, owner, date, is_deleted
            FROM replies
            WHERE comment_id = $1
            ORDER BY date ASC, id ASC
            ",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reply::from).collect())
    }
}
