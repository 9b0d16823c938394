//! Delete reply use case

use forum_core::{DeleteReply, DomainResult};
use serde_json::Value;
use tracing::{info, instrument};

use super::context::ServiceContext;

pub struct DeleteReplyUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeleteReplyUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Soft-delete a reply owned by the caller after confirming the
    /// thread → comment → reply chain.
    #[instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> DomainResult<()> {
        let request = DeleteReply::from_payload(payload)?;
        let replies = self.ctx.reply_repo();

        self.ctx
            .thread_repo()
            .verify_thread_exists(&request.thread_id)
            .await?;
        self.ctx
            .comment_repo()
            .verify_comment_in_thread(&request.comment_id, &request.thread_id)
            .await?;
        replies
            .verify_reply_in_comment_and_owner(
                &request.comment_id,
                &request.reply_id,
                &request.owner,
            )
            .await?;
        replies.soft_delete_reply(&request.reply_id).await?;

        info!(reply_id = %request.reply_id, "Reply deleted");
        Ok(())
    }
}
