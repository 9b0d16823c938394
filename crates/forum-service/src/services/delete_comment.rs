//! Delete comment use case

use forum_core::{DeleteComment, DomainResult};
use serde_json::Value;
use tracing::{info, instrument};

use super::context::ServiceContext;

pub struct DeleteCommentUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeleteCommentUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Soft-delete a comment owned by the caller.
    ///
    /// Checks run thread, then comment-in-thread, then ownership, so a missing
    /// resource is always reported before a foreign one. Deleting an already
    /// deleted comment succeeds again.
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> DomainResult<()> {
        let request = DeleteComment::from_payload(payload)?;
        let comments = self.ctx.comment_repo();

        self.ctx
            .thread_repo()
            .verify_thread_exists(&request.thread_id)
            .await?;
        comments
            .verify_comment_in_thread(&request.comment_id, &request.thread_id)
            .await?;
        comments
            .verify_comment_owner(&request.comment_id, &request.owner)
            .await?;
        comments.soft_delete_comment(&request.comment_id).await?;

        info!(comment_id = %request.comment_id, "Comment deleted");
        Ok(())
    }
}
