//! Comment entity <-> model mapper

use forum_core::entities::{Comment, CreateComment, CreatedComment};
use forum_core::error::DomainError;

use crate::models::{CommentModel, CreatedCommentModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            thread_id: model.thread_id,
            owner: model.owner,
            date: model.date.and_utc(),
            is_deleted: model.is_deleted,
        }
    }
}

impl TryFrom<CreatedCommentModel> for CreatedComment {
    type Error = DomainError;

    fn try_from(model: CreatedCommentModel) -> Result<Self, Self::Error> {
        CreatedComment::new(model.id, model.content, model.owner)
    }
}

/// Values bound by a comment insert
pub struct CommentInsert<'a> {
    pub id: String,
    pub content: &'a str,
    pub thread_id: &'a str,
    pub owner: &'a str,
}

impl<'a> CommentInsert<'a> {
    pub fn new(id: String, comment: &'a CreateComment) -> Self {
        Self {
            id,
            content: &comment.content,
            thread_id: &comment.thread_id,
            owner: &comment.owner,
        }
    }
}
