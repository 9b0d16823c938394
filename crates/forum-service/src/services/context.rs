//! Service context - dependency container for use cases
//!
//! Holds the repositories every use case draws from.

use std::sync::Arc;

use forum_common::{AppConfig, AppError, AppResult};
use forum_core::traits::{CommentRepository, ReplyRepository, ThreadRepository, UserRepository};
use forum_core::{IdGenerator, UuidIdGenerator};
use forum_db::{
    create_pool, DatabaseConfig, PgCommentRepository, PgPool, PgReplyRepository,
    PgThreadRepository, PgUserRepository,
};
use tracing::info;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            user_repo,
        }
    }

    /// Wire the PostgreSQL repositories over an existing pool
    pub fn from_pool(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self::new(
            Arc::new(PgThreadRepository::new(pool.clone(), Arc::clone(&id_generator))),
            Arc::new(PgCommentRepository::new(pool.clone(), Arc::clone(&id_generator))),
            Arc::new(PgReplyRepository::new(pool.clone(), id_generator)),
            Arc::new(PgUserRepository::new(pool)),
        )
    }

    /// Open a connection pool from configuration and wire the repositories
    ///
    /// # Errors
    /// Returns `AppError::Database` if the pool cannot be established
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        let db_config = DatabaseConfig::from(&config.database);
        let pool = create_pool(&db_config)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        info!(
            max_connections = db_config.max_connections,
            "Database pool established"
        );

        Ok(Self::from_pool(pool, Arc::new(UuidIdGenerator)))
    }

    // === Repositories ===

    /// Get the thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext from individually supplied repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `AppError::Internal` if any repository is missing
    pub fn build(self) -> AppResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.thread_repo.ok_or_else(|| missing("thread_repo"))?,
            self.comment_repo.ok_or_else(|| missing("comment_repo"))?,
            self.reply_repo.ok_or_else(|| missing("reply_repo"))?,
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
        ))
    }
}

fn missing(name: &str) -> AppError {
    AppError::internal(anyhow::anyhow!("{name} is required"))
}
