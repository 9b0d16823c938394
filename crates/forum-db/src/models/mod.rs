//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod reply;
mod thread;

pub use comment::{CommentModel, CreatedCommentModel};
pub use reply::{CreatedReplyModel, ReplyModel};
pub use thread::{CreatedThreadModel, ThreadModel};

use sqlx::FromRow;

/// `id, owner` projection used by ownership checks
#[derive(Debug, Clone, FromRow)]
pub struct OwnerModel {
    pub id: String,
    pub owner: String,
}

impl OwnerModel {
    #[inline]
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }
}
