//! Test helpers for integration tests
//!
//! Provides the wired-up application under test and environment checks.

use std::sync::Arc;

use anyhow::Result;
use forum_common::AppConfig;
use forum_core::UuidIdGenerator;
use forum_db::{create_pool, ensure_schema, DatabaseConfig, PgPool};
use forum_service::ServiceContext;

/// Use cases wired to PostgreSQL, plus a raw pool for table helpers
pub struct TestApp {
    pub pool: PgPool,
    pub ctx: ServiceContext,
}

impl TestApp {
    /// Connect using configuration from the environment and make sure the
    /// tables exist
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        // Tests run in parallel, each with its own pool
        let db_config = DatabaseConfig {
            max_connections: 5,
            min_connections: 0,
            ..DatabaseConfig::from(&config.database)
        };
        let pool = create_pool(&db_config).await?;
        ensure_schema(&pool).await?;

        let ctx = ServiceContext::from_pool(pool.clone(), Arc::new(UuidIdGenerator));
        Ok(Self { pool, ctx })
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}
