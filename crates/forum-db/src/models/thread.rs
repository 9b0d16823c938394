//! Thread database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for threads table
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub date: NaiveDateTime,
}

/// Columns returned by a thread insert
#[derive(Debug, Clone, FromRow)]
pub struct CreatedThreadModel {
    pub id: String,
    pub title: String,
    pub owner: String,
}
