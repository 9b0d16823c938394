//! Domain errors - error types for the domain layer

use std::fmt;

use thiserror::Error;

/// Operation whose payload shape failed validation.
///
/// The string form is the tag prefixed to validation codes, e.g.
/// `CREATE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateThread,
    CreatedThread,
    CreateComment,
    CreatedComment,
    CreateReply,
    CreatedReply,
    DeleteComment,
    DeleteReply,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateThread => "CREATE_THREAD",
            Self::CreatedThread => "CREATED_THREAD",
            Self::CreateComment => "CREATE_COMMENT",
            Self::CreatedComment => "CREATED_COMMENT",
            Self::CreateReply => "CREATE_REPLY",
            Self::CreatedReply => "CREATED_REPLY",
            Self::DeleteComment => "DELETE_COMMENT",
            Self::DeleteReply => "DELETE_REPLY",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was wrong with a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadViolation {
    /// A required field is absent, null or empty
    MissingProperty,
    /// A field is present but has the wrong primitive type
    DataType,
}

impl PayloadViolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::DataType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

impl fmt::Display for PayloadViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{operation}.{violation}")]
    InvalidPayload {
        operation: Operation,
        violation: PayloadViolation,
    },

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Thread not found: {0}")]
    ThreadNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    #[error("Comment {comment_id} not found in thread {thread_id}")]
    CommentNotInThread {
        comment_id: String,
        thread_id: String,
    },

    #[error("Reply not found: {0}")]
    ReplyNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not comment owner")]
    NotCommentOwner,

    #[error("Not reply owner")]
    NotReplyOwner,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Shorthand for a missing-property validation failure
    pub fn missing_property(operation: Operation) -> Self {
        Self::InvalidPayload {
            operation,
            violation: PayloadViolation::MissingProperty,
        }
    }

    /// Shorthand for a wrong-type validation failure
    pub fn data_type(operation: Operation) -> Self {
        Self::InvalidPayload {
            operation,
            violation: PayloadViolation::DataType,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> String {
        match self {
            Self::InvalidPayload {
                operation,
                violation,
            } => format!("{operation}.{violation}"),
            other => other.kind_code().to_string(),
        }
    }

    fn kind_code(&self) -> &'static str {
        match self {
            Self::InvalidPayload { .. } => "INVALID_PAYLOAD",
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::CommentNotInThread { .. } => "COMMENT_NOT_IN_THREAD",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::NotCommentOwner => "NOT_COMMENT_OWNER",
            Self::NotReplyOwner => "NOT_REPLY_OWNER",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPayload { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ThreadNotFound(_)
                | Self::CommentNotFound(_)
                | Self::CommentNotInThread { .. }
                | Self::ReplyNotFound(_)
                | Self::UserNotFound(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotCommentOwner | Self::NotReplyOwner)
    }
}
