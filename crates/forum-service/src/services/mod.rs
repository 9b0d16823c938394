//! Use cases
//!
//! One type per operation. Each borrows the [`ServiceContext`] and exposes a
//! single `execute` method.

pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod context;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread;

pub use add_comment::AddCommentUseCase;
pub use add_reply::AddReplyUseCase;
pub use add_thread::AddThreadUseCase;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use get_thread::GetThreadUseCase;
