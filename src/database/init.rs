//! Opens the SQLite file and brings its schema up to date.

use super::DbPool;
use crate::error::LoadError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Opens (creating if needed) the database at `path` and runs pending migrations.
pub async fn open(path: &Path) -> Result<DbPool, LoadError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = connect_with(options, 4).await?;
    info!(target = "db", path = %path.display(), "database ready");
    Ok(pool)
}

/// Builds a pool from explicit options and migrates it. Connections are kept alive for
/// the pool's lifetime so an in-memory database survives between queries.
pub async fn connect_with(
    options: SqliteConnectOptions,
    max_connections: u32,
) -> Result<DbPool, LoadError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}
