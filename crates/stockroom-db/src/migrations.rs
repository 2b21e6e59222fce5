//! # Database Migrations
//!
//! Embedded SQL migrations, compiled into the binary.
//!
//! ## How It Works
//! ```text
//! migrations/sqlite/            (workspace root)
//! └── 001_create_products.sql   ← products table + lookup indexes
//!
//! sqlx::migrate!() embeds these files at compile time.
//! At runtime, run_migrations() applies any that haven't run yet,
//! tracked in the _sqlx_migrations table.
//! ```
//!
//! ## Adding a Migration
//! 1. Create `migrations/sqlite/NNN_description.sql` (next number)
//! 2. Write forward-only SQL (no down migrations)
//! 3. Rebuild; the new file is picked up automatically

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies all pending migrations to the given pool.
///
/// Idempotent: migrations that have already run are skipped.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    debug!(total = MIGRATOR.iter().count(), "Applying migrations");
    MIGRATOR.run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}

/// Reports migration status as `(total, applied)`.
///
/// Useful for startup diagnostics and the seed tool.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.iter().count();

    let applied: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = TRUE")
            .fetch_one(pool)
            .await?;

    Ok((total, applied as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_migrations_apply_cleanly() {
        let pool = memory_pool().await;
        run_migrations(&pool).await.unwrap();

        // Table exists and is queryable after migration
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = memory_pool().await;
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let (total, applied) = migration_status(&pool).await.unwrap();
        assert_eq!(total, applied);
        assert!(total >= 1);
    }
}
