//! Add comment use case

use forum_core::{CreateComment, CreatedComment, DomainResult};
use serde_json::Value;
use tracing::{info, instrument};

use super::context::ServiceContext;

pub struct AddCommentUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddCommentUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate the payload, check the thread exists, then insert the comment
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> DomainResult<CreatedComment> {
        let new_comment = CreateComment::from_payload(payload)?;

        self.ctx
            .thread_repo()
            .verify_thread_exists(&new_comment.thread_id)
            .await?;

        let created = self.ctx.comment_repo().add_comment(&new_comment).await?;

        info!(
            comment_id = %created.id,
            thread_id = %new_comment.thread_id,
            "Comment created"
        );
        Ok(created)
    }
}
