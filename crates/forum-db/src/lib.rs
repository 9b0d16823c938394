//! # forum-db
//!
//! Database layer implementing the forum repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Row ↔ entity mappers
//! - Repository implementations, including id generation and soft deletes
//! - Idempotent table bootstrap for fresh databases
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use forum_core::{ThreadRepository, UuidIdGenerator};
//! use forum_db::pool::{create_pool, DatabaseConfig};
//! use forum_db::repositories::PgThreadRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let thread_repo = PgThreadRepository::new(pool, Arc::new(UuidIdGenerator));
//!
//!     thread_repo.verify_thread_exists("thread-123").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgReplyRepository, PgThreadRepository, PgUserRepository,
};
pub use schema::ensure_schema;
