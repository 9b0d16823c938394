//! Reply entity - second-level nesting, attached to a comment

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::payload::{require_present, required_strings};
use crate::error::{DomainResult, Operation};

/// Content shown in place of a soft-deleted reply
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// Stored reply row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub comment_id: String,
    pub owner: String,
    pub date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Reply {
    /// Content as it should be shown to readers. The stored content is untouched.
    pub fn display_content(&self) -> &str {
        if self.is_deleted {
            DELETED_REPLY_CONTENT
        } else {
            &self.content
        }
    }
}

/// Validated input for creating a reply
///
/// Carries the thread id as well as the comment id so the pairing can be
/// checked before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReply {
    pub content: String,
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

impl CreateReply {
    pub fn new(
        content: impl Into<String>,
        thread_id: impl Into<String>,
        comment_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (content, thread_id, comment_id, owner) =
            (content.into(), thread_id.into(), comment_id.into(), owner.into());
        require_present(
            Operation::CreateReply,
            &[
                content.as_str(),
                thread_id.as_str(),
                comment_id.as_str(),
                owner.as_str(),
            ],
        )?;
        Ok(Self {
            content,
            thread_id,
            comment_id,
            owner,
        })
    }

    /// Parse from an untyped JSON payload (`content`, `threadId`, `commentId`, `owner`)
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [content, thread_id, comment_id, owner] = required_strings(
            payload,
            Operation::CreateReply,
            ["content", "threadId", "commentId", "owner"],
        )?;
        Ok(Self {
            content,
            thread_id,
            comment_id,
            owner,
        })
    }
}

/// Result of a successful reply insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl CreatedReply {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (id, content, owner) = (id.into(), content.into(), owner.into());
        require_present(
            Operation::CreatedReply,
            &[id.as_str(), content.as_str(), owner.as_str()],
        )?;
        Ok(Self { id, content, owner })
    }

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [id, content, owner] =
            required_strings(payload, Operation::CreatedReply, ["id", "content", "owner"])?;
        Ok(Self { id, content, owner })
    }
}

/// Validated input for soft-deleting a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
    pub owner: String,
}

impl DeleteReply {
    pub fn new(
        thread_id: impl Into<String>,
        comment_id: impl Into<String>,
        reply_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (thread_id, comment_id, reply_id, owner) =
            (thread_id.into(), comment_id.into(), reply_id.into(), owner.into());
        require_present(
            Operation::DeleteReply,
            &[
                thread_id.as_str(),
                comment_id.as_str(),
                reply_id.as_str(),
                owner.as_str(),
            ],
        )?;
        Ok(Self {
            thread_id,
            comment_id,
            reply_id,
            owner,
        })
    }

    /// Parse from an untyped JSON payload (`threadId`, `commentId`, `replyId`, `owner`)
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [thread_id, comment_id, reply_id, owner] = required_strings(
            payload,
            Operation::DeleteReply,
            ["threadId", "commentId", "replyId", "owner"],
        )?;
        Ok(Self {
            thread_id,
            comment_id,
            reply_id,
            owner,
        })
    }
}
