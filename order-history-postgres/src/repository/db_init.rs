//! Database schema setup
//!
//! Migrations under `migrations/` are embedded at compile time and applied
//! through sqlx's migration table, so running them twice is a no-op.

use sqlx::migrate::MigrateError;
use sqlx::PgPool;
use tracing::info;

/// Apply pending migrations to the database behind `pool`.
///
/// # Example
///
/// ```rust,no_run
/// use sqlx::PgPool;
/// use order_history_postgres::repository::db_init::init_database;
///
/// # async fn example(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// init_database(pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await?;
    info!("order history schema is up to date");
    Ok(())
}
