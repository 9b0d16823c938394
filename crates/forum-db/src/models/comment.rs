//! Comment database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: String,
    pub content: String,
    pub thread_id: String,
    pub owner: String,
    pub date: NaiveDateTime,
    pub is_deleted: bool,
}

/// Columns returned by a comment insert
#[derive(Debug, Clone, FromRow)]
pub struct CreatedCommentModel {
    pub id: String,
    pub content: String,
    pub owner: String,
}
