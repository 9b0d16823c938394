//! Test fixtures and table helpers
//!
//! Rows are seeded under fresh ids so concurrently running tests never
//! observe each other's data.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use forum_db::PgPool;
use serde_json::{json, Value};

/// Fresh id such as `thread-3f2a...`
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

/// Midnight on 2023-01-01 plus the given minutes
pub fn fixed_date(minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(0, minute, 0))
        .unwrap_or_default()
}

/// A seeded user
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub username: String,
}

pub struct UsersTable;

impl UsersTable {
    pub async fn add(pool: &PgPool) -> Result<TestUser> {
        let id = unique_id("user");
        let username = format!("dicoding_{}", &id[5..21]);
        sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
            .bind(&id)
            .bind(&username)
            .execute(pool)
            .await?;
        Ok(TestUser { id, username })
    }
}

pub struct ThreadsTable;

impl ThreadsTable {
    pub async fn add(pool: &PgPool, owner: &str) -> Result<String> {
        let id = unique_id("thread");
        sqlx::query(
            "INSERT INTO threads (id, title, body, owner, date) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&id)
        .bind("sebuah thread")
        .bind("sebuah body thread")
        .bind(owner)
        .bind(fixed_date(0))
        .execute(pool)
        .await?;
        Ok(id)
    }
}

/// Stored comment columns as read back by tests
#[derive(Debug, sqlx::FromRow)]
pub struct CommentRow {
    pub id: String,
    pub content: String,
    pub thread_id: String,
    pub owner: String,
    pub is_deleted: bool,
}

pub struct CommentsTable;

impl CommentsTable {
    pub async fn add(
        pool: &PgPool,
        thread_id: &str,
        owner: &str,
        date: NaiveDateTime,
    ) -> Result<String> {
        let id = unique_id("comment");
        sqlx::query(
            "INSERT INTO comments (id, content, thread_id, owner, date) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&id)
        .bind("sebuah komentar")
        .bind(thread_id)
        .bind(owner)
        .bind(date)
        .execute(pool)
        .await?;
        Ok(id)
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<CommentRow>> {
        Ok(sqlx::query_as::<_, CommentRow>(
            "SELECT id, content, thread_id, owner, is_deleted FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }
}

/// Stored reply columns as read back by tests
#[derive(Debug, sqlx::FromRow)]
pub struct ReplyRow {
    pub id: String,
    pub content: String,
    pub comment_id: String,
    pub owner: String,
    pub is_deleted: bool,
}

pub struct RepliesTable;

impl RepliesTable {
    pub async fn add(
        pool: &PgPool,
        comment_id: &str,
        owner: &str,
        date: NaiveDateTime,
    ) -> Result<String> {
        let id = unique_id("reply");
        sqlx::query(
            "INSERT INTO replies (id, content, comment_id, owner, date) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&id)
        .bind("sebuah balasan")
        .bind(comment_id)
        .bind(owner)
        .bind(date)
        .execute(pool)
        .await?;
        Ok(id)
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<ReplyRow>> {
        Ok(sqlx::query_as::<_, ReplyRow>(
            "SELECT id, content, comment_id, owner, is_deleted FROM replies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?)
    }

    pub async fn count_by_comment_id(pool: &PgPool, comment_id: &str) -> Result<i64> {
        Ok(sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_one(pool)
            .await?)
    }
}

// ============================================================================
// Payloads
// ============================================================================

pub fn thread_payload(owner: &str) -> Value {
    json!({
        "title": "sebuah thread",
        "body": "sebuah body thread",
        "owner": owner,
    })
}

pub fn comment_payload(thread_id: &str, owner: &str) -> Value {
    json!({
        "content": "sebuah komentar",
        "threadId": thread_id,
        "owner": owner,
    })
}

pub fn reply_payload(thread_id: &str, comment_id: &str, owner: &str) -> Value {
    json!({
        "content": "sebuah balasan",
        "threadId": thread_id,
        "commentId": comment_id,
        "owner": owner,
    })
}

pub fn delete_comment_payload(thread_id: &str, comment_id: &str, owner: &str) -> Value {
    json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "owner": owner,
    })
}

pub fn delete_reply_payload(
    thread_id: &str,
    comment_id: &str,
    reply_id: &str,
    owner: &str,
) -> Value {
    json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "replyId": reply_id,
        "owner": owner,
    })
}
