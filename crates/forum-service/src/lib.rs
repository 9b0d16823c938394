//! # forum-service
//!
//! Application layer: the use cases that validate payloads, run existence and
//! ownership checks in a fixed order, and delegate to the repositories.

pub mod dto;
pub mod services;

pub use dto::{CommentView, ReplyView, ThreadView};
pub use services::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetThreadUseCase, ServiceContext, ServiceContextBuilder,
};
