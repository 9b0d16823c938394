//! Get thread use case
//!
//! Assembles a thread with every comment and every reply, resolving owners to
//! usernames. Lookups that do not depend on each other run concurrently, and
//! results are put back together in the order the repositories returned them.

use forum_core::{Comment, DomainError, DomainResult};
use futures::future::try_join_all;
use futures::try_join;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use crate::dto::{CommentView, ReplyView, ThreadView};

pub struct GetThreadUseCase<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetThreadUseCase<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a thread with its comments and replies in ascending date order
    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> DomainResult<ThreadView> {
        let threads = self.ctx.thread_repo();
        threads.verify_thread_exists(thread_id).await?;
        let thread = threads.find_by_id(thread_id).await?;

        let (username, comments) = try_join!(
            self.ctx.user_repo().get_username_by_id(&thread.owner),
            self.ctx.comment_repo().find_by_thread_id(thread_id),
        )?;

        let comment_views = try_join_all(comments.iter().map(|c| self.comment_view(c))).await?;

        debug!(comments = comment_views.len(), "Thread assembled");
        Ok(ThreadView::new(thread, username, comment_views))
    }

    async fn comment_view(&self, comment: &Comment) -> DomainResult<CommentView> {
        let users = self.ctx.user_repo();

        let (username, replies) = try_join!(
            users.get_username_by_id(&comment.owner),
            self.ctx.reply_repo().find_by_comment_id(&comment.id),
        )?;

        let reply_views = try_join_all(replies.iter().map(|reply| async move {
            let username = users.get_username_by_id(&reply.owner).await?;
            Ok::<_, DomainError>(ReplyView::new(reply, username))
        }))
        .await?;

        Ok(CommentView::new(comment, username, reply_views))
    }
}
