//! Add reply use case

use forum_core::{CreateReply, CreatedReply, DomainResult};
use serde_json::Value;
use tracing::{info, instrument};

use super::context::ServiceContext;

pub struct AddReplyUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddReplyUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate the payload, check the thread exists and owns the comment,
    /// then insert the reply
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> DomainResult<CreatedReply> {
        let new_reply = CreateReply::from_payload(payload)?;

        self.ctx
            .thread_repo()
            .verify_thread_exists(&new_reply.thread_id)
            .await?;
        self.ctx
            .comment_repo()
            .verify_comment_in_thread(&new_reply.comment_id, &new_reply.thread_id)
            .await?;

        let created = self.ctx.reply_repo().add_reply(&new_reply).await?;

        info!(
            reply_id = %created.id,
            comment_id = %new_reply.comment_id,
            "Reply created"
        );
        Ok(created)
    }
}
