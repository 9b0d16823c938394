//! Read-side view models for a thread with its nested comments and replies
//!
//! Owners are replaced by their usernames, and soft-deleted content is
//! replaced by its placeholder. Ids, dates and positions are kept.

use chrono::{DateTime, Utc};
use forum_core::{Comment, Reply, Thread};
use serde::Serialize;

/// A thread as returned to readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadView {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentView>,
}

impl ThreadView {
    pub fn new(thread: Thread, username: String, comments: Vec<CommentView>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username,
            comments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<ReplyView>,
}

impl CommentView {
    pub fn new(comment: &Comment, username: String, replies: Vec<ReplyView>) -> Self {
        Self {
            id: comment.id.clone(),
            username,
            date: comment.date,
            content: comment.display_content().to_string(),
            replies,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyView {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl ReplyView {
    pub fn new(reply: &Reply, username: String) -> Self {
        Self {
            id: reply.id.clone(),
            content: reply.display_content().to_string(),
            date: reply.date,
            username,
        }
    }
}
