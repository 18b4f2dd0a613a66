use std::env;
use std::path::PathBuf;

use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;

/// Initialize the on-device store from environment variables
///
/// Environment variables:
/// - STORE_DATABASE_PATH: SQLite file location (default: data/storefront.db)
///
/// # Errors
/// Returns error if the pool cannot be opened or migrations fail
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let path = env::var("STORE_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data").join("storefront.db"));

    let pool = create_sqlite_pool(&DatabaseConfig::new(path)).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
