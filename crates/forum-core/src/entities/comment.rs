//! Comment entity - a reply attached directly to a thread

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::payload::{require_present, required_strings};
use crate::error::{DomainResult, Operation};

/// Content shown in place of a soft-deleted comment
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Stored comment row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub thread_id: String,
    pub owner: String,
    pub date: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Comment {
    /// Content as it should be shown to readers. The stored content is untouched.
    pub fn display_content(&self) -> &str {
        if self.is_deleted {
            DELETED_COMMENT_CONTENT
        } else {
            &self.content
        }
    }
}

/// Validated input for creating a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl CreateComment {
    pub fn new(
        content: impl Into<String>,
        thread_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (content, thread_id, owner) = (content.into(), thread_id.into(), owner.into());
        require_present(
            Operation::CreateComment,
            &[content.as_str(), thread_id.as_str(), owner.as_str()],
        )?;
        Ok(Self {
            content,
            thread_id,
            owner,
        })
    }

    /// Parse from an untyped JSON payload (`content`, `threadId`, `owner`)
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [content, thread_id, owner] = required_strings(
            payload,
            Operation::CreateComment,
            ["content", "threadId", "owner"],
        )?;
        Ok(Self {
            content,
            thread_id,
            owner,
        })
    }
}

/// Result of a successful comment insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl CreatedComment {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (id, content, owner) = (id.into(), content.into(), owner.into());
        require_present(
            Operation::CreatedComment,
            &[id.as_str(), content.as_str(), owner.as_str()],
        )?;
        Ok(Self { id, content, owner })
    }

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [id, content, owner] =
            required_strings(payload, Operation::CreatedComment, ["id", "content", "owner"])?;
        Ok(Self { id, content, owner })
    }
}

/// Validated input for soft-deleting a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

impl DeleteComment {
    pub fn new(
        thread_id: impl Into<String>,
        comment_id: impl Into<String>,
        owner: impl Into<String>,
    ) -> DomainResult<Self> {
        let (thread_id, comment_id, owner) = (thread_id.into(), comment_id.into(), owner.into());
        require_present(
            Operation::DeleteComment,
            &[thread_id.as_str(), comment_id.as_str(), owner.as_str()],
        )?;
        Ok(Self {
            thread_id,
            comment_id,
            owner,
        })
    }

    /// Parse from an untyped JSON payload (`threadId`, `commentId`, `owner`)
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let [thread_id, comment_id, owner] = required_strings(
            payload,
            Operation::DeleteComment,
            ["threadId", "commentId", "owner"],
        )?;
        Ok(Self {
            thread_id,
            comment_id,
            owner,
        })
    }
}
