//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "thread not found" error
pub fn thread_not_found(id: &str) -> DomainError {
    DomainError::ThreadNotFound(id.to_string())
}

/// Create a "comment not found" error
pub fn comment_not_found(id: &str) -> DomainError {
    DomainError::CommentNotFound(id.to_string())
}

/// Create a "comment not found in thread" error
pub fn comment_not_in_thread(comment_id: &str, thread_id: &str) -> DomainError {
    DomainError::CommentNotInThread {
        comment_id: comment_id.to_string(),
        thread_id: thread_id.to_string(),
    }
}

/// Create a "reply not found" error
pub fn reply_not_found(id: &str) -> DomainError {
    DomainError::ReplyNotFound(id.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: &str) -> DomainError {
    DomainError::UserNotFound(id.to_string())
}
