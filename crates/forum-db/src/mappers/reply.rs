//! Reply entity <-> model mapper

use forum_core::entities::{CreateReply, CreatedReply, Reply};
use forum_core::error::DomainError;

use crate::models::{CreatedReplyModel, ReplyModel};

/// Convert ReplyModel to Reply entity
impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: model.id,
            content: model.content,
            comment_id: model.comment_id,
            owner: model.owner,
            date: model.date.and_utc(),
            is_deleted: model.is_deleted,
        }
    }
}

impl TryFrom<CreatedReplyModel> for CreatedReply {
    type Error = DomainError;

    fn try_from(model: CreatedReplyModel) -> Result<Self, Self::Error> {
        CreatedReply::new(model.id, model.content, model.owner)
    }
}

/// Values bound by a reply insert. The thread id is not stored on replies.
pub struct ReplyInsert<'a> {
    pub id: String,
    pub content: &'a str,
    pub comment_id: &'a str,
    pub owner: &'a str,
}

impl<'a> ReplyInsert<'a> {
    pub fn new(id: String, reply: &'a CreateReply) -> Self {
        Self {
            id,
            content: &reply.content,
            comment_id: &reply.comment_id,
            owner: &reply.owner,
        }
    }
}
