//! Domain entities - threads, comments, replies and the payload shapes
//! that gate every operation on them

mod comment;
mod payload;
mod reply;
mod thread;

pub use comment::{Comment, CreateComment, CreatedComment, DeleteComment, DELETED_COMMENT_CONTENT};
pub use reply::{CreateReply, CreatedReply, DeleteReply, Reply, DELETED_REPLY_CONTENT};
pub use thread::{CreateThread, CreatedThread, Thread};
