//! # forum-core
//!
//! Domain layer of the discussion forum: threads, comments and replies, the
//! payload shapes that gate every operation, the domain error taxonomy, and
//! the repository traits implemented by the infrastructure layer.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CreateComment, CreateReply, CreateThread, CreatedComment, CreatedReply,
    CreatedThread, DeleteComment, DeleteReply, Reply, Thread, DELETED_COMMENT_CONTENT,
    DELETED_REPLY_CONTENT,
};
pub use error::{DomainError, DomainResult, Operation, PayloadViolation};
pub use traits::{CommentRepository, ReplyRepository, ThreadRepository, UserRepository};
pub use value_objects::{EntityKind, FixedIdGenerator, IdGenerator, UuidIdGenerator};

#[cfg(any(test, feature = "testing"))]
pub use traits::{
    MockCommentRepository, MockReplyRepository, MockThreadRepository, MockUserRepository,
};
