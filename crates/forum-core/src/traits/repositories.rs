//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Verification methods return `Ok(())` when the
//! check passes and a not-found or authorization [`DomainError`] otherwise.
//!
//! [`DomainError`]: crate::error::DomainError

use async_trait::async_trait;

use crate::entities::{
    Comment, CreateComment, CreateReply, CreateThread, CreatedComment, CreatedReply,
    CreatedThread, Reply, Thread,
};
use crate::error::DomainResult;

// ============================================================================
// Thread Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Insert a thread under a freshly generated `thread-` id
    async fn add_thread(&self, thread: &CreateThread) -> DomainResult<CreatedThread>;

    /// Fail with `ThreadNotFound` unless the thread exists
    async fn verify_thread_exists(&self, id: &str) -> DomainResult<()>;

    /// Fetch a thread, failing with `ThreadNotFound`
    async fn find_by_id(&self, id: &str) -> DomainResult<Thread>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment under a freshly generated `comment-` id
    async fn add_comment(&self, comment: &CreateComment) -> DomainResult<CreatedComment>;

    /// Fail with `CommentNotFound` unless the comment exists
    async fn verify_comment_exists(&self, id: &str) -> DomainResult<()>;

    /// Fail with `CommentNotInThread` unless the comment belongs to the thread
    async fn verify_comment_in_thread(&self, comment_id: &str, thread_id: &str)
        -> DomainResult<()>;

    /// Fail with `CommentNotFound` or `NotCommentOwner`
    async fn verify_comment_owner(&self, id: &str, owner: &str) -> DomainResult<()>;

    /// Flag the comment as deleted; the row and its content are kept
    async fn soft_delete_comment(&self, id: &str) -> DomainResult<()>;

    /// All comments of a thread, deleted ones included, oldest first
    async fn find_by_thread_id(&self, thread_id: &str) -> DomainResult<Vec<Comment>>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Insert a reply under a freshly generated `reply-` id
    async fn add_reply(&self, reply: &CreateReply) -> DomainResult<CreatedReply>;

    /// Fail with `ReplyNotFound` or `NotReplyOwner`
    async fn verify_reply_owner(&self, id: &str, owner: &str) -> DomainResult<()>;

    /// Fail with `ReplyNotFound` unless the reply sits under the comment,
    /// then with `NotReplyOwner` unless `owner` wrote it
    async fn verify_reply_in_comment_and_owner(
        &self,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> DomainResult<()>;

    /// Flag the reply as deleted; the row and its content are kept
    async fn soft_delete_reply(&self, id: &str) -> DomainResult<()>;

    /// All replies of a comment, deleted ones included, oldest first
    async fn find_by_comment_id(&self, comment_id: &str) -> DomainResult<Vec<Reply>>;
}

// ============================================================================
// User Repository
// ============================================================================

/// Read access to the externally managed `users` table
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolve a user id to its username, failing with `UserNotFound`
    async fn get_username_by_id(&self, id: &str) -> DomainResult<String>;
}
