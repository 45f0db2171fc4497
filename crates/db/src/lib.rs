//! PostgreSQL persistence for the Quorum forum.
//!
//! Models are plain `FromRow` structs; repositories are unit structs with
//! async functions taking the pool (or an executor, for the pieces that
//! must run inside a caller's transaction). Vote casting and flag filing
//! each run in a single transaction together with their counter and
//! reputation adjustments.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

/// Convenience alias for the shared connection pool.
pub type DbPool = sqlx::PgPool;

/// Default maximum connections for the pool.
const MAX_CONNECTIONS: u32 = 10;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
