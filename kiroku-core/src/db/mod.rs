pub mod models;
pub mod operations;

use anyhow::Result;
use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use std::time::Duration;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Opens (creating if missing) the store file and returns a pool configured
/// for it. Accepts either a bare filesystem path or a `sqlite://` URL.
pub async fn connect(path: &str) -> Result<SqlitePool> {
    let path = path
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create DB pool: {}", e))?;

    Ok(pool)
}

fn parse_sql_statements(sql: &str) -> Vec<String> {
    sql.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with("--")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Applies the embedded schema. Every statement is CREATE TABLE IF NOT
/// EXISTS, so calling this against an already-initialized store is a no-op.
/// Must run once during startup, before any operation touches the pool.
pub async fn init_database(pool: &SqlitePool) -> Result<()> {
    info!("Initializing database schema");

    for statement in parse_sql_statements(SCHEMA_SQL) {
        debug!("Executing schema statement: {}", statement);
        sqlx::query(&statement).execute(pool).await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to execute schema statement: {} - Error: {}",
                statement,
                e
            )
        })?;
    }

    info!("Database schema ready");
    Ok(())
}
