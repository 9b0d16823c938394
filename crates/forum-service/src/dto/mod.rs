//! Data transfer objects returned by the read side

pub mod views;

pub use views::{CommentView, ReplyView, ThreadView};
