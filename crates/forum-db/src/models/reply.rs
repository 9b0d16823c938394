//! Reply database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: String,
    pub content: String,
    pub comment_id: String,
    pub owner: String,
    pub date: NaiveDateTime,
    pub is_deleted: bool,
}

/// Columns returned by a reply insert
#[derive(Debug, Clone, FromRow)]
pub struct CreatedReplyModel {
    pub id: String,
    pub content: String,
    pub owner: String,
}
