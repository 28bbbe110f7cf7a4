//! PostgreSQL persistence for centers, sports, courts, and bookings.

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Migrations embedded from `db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// SQLSTATE 57P03, `cannot_connect_now`: the server is still starting up.
const CANNOT_CONNECT_NOW: &str = "57P03";

/// Pool tuning. Every bound here applies per connection or per acquire, so a
/// stalled store surfaces as an error instead of a hung request.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// How long a request may wait for a free connection.
    pub acquire_timeout: Duration,
    /// Postgres `statement_timeout` applied to every pooled connection.
    pub statement_timeout: Duration,
    /// Extra attempts [`connect_with_retry`] makes after the first failure.
    pub connect_retries: u32,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 20,
            acquire_timeout: Duration::from_secs(5),
            statement_timeout: Duration::from_millis(5000),
            connect_retries: 5,
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<DbPool, sqlx::Error> {
    create_pool_with(PgConnectOptions::from_str(database_url)?, settings).await
}

/// Create a connection pool from parsed connect options, applying `settings`.
pub async fn create_pool_with(
    options: PgConnectOptions,
    settings: &PoolSettings,
) -> Result<DbPool, sqlx::Error> {
    let options = options.options([(
        "statement_timeout",
        settings.statement_timeout.as_millis().to_string(),
    )]);

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
}

/// Create a pool, retrying with capped exponential backoff.
///
/// Only used at startup. Request-path statements are never retried.
pub async fn connect_with_retry(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<DbPool, sqlx::Error> {
    let mut delay = Duration::from_millis(500);
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        match create_pool(database_url, settings).await {
            Ok(pool) => return Ok(pool),
            Err(err) if attempt <= settings.connect_retries && is_transient(&err) => {
                tracing::warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Database not reachable, retrying",
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(Duration::from_secs(30));
            }
            Err(err) => return Err(err),
        }
    }
}

/// Connection-level failures worth another attempt, including a server that
/// is still starting up. Bad credentials or a malformed URL are not.
fn is_transient(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::Tls(_) => true,
        sqlx::Error::Database(db_err) => is_transient_code(db_err.code().as_deref()),
        _ => false,
    }
}

fn is_transient_code(code: Option<&str>) -> bool {
    code == Some(CANNOT_CONNECT_NOW)
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Newest migration version compiled into this binary.
pub fn expected_schema_version() -> Option<i64> {
    MIGRATOR.iter().map(|m| m.version).max()
}

/// Newest migration version successfully applied to the store, or `None`
/// if nothing has been applied yet.
pub async fn applied_schema_version(pool: &DbPool) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<i64>>(
        "SELECT MAX(version) FROM _sqlx_migrations WHERE success",
    )
    .fetch_one(pool)
    .await
}
