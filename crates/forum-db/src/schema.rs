//! Table bootstrap
//!
//! Creates the forum tables when they are missing. Safe to call from several
//! processes at once: creation is serialized on a transaction-scoped advisory lock.

use sqlx::PgPool;
use tracing::{info, instrument};

/// DDL for `users`, `threads`, `comments` and `replies`
pub const SCHEMA_SQL: &str = include_str!("../schema.sql");

const SCHEMA_LOCK_KEY: i64 = 0x0066_6f72_756d;

/// Create any missing forum tables and indexes
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;

    tx.commit().await?;
    info!("Forum schema ready");
    Ok(())
}
