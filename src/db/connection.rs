// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// File name of the catalog database inside the data directory
pub const DATABASE_FILE: &str = "moviedb.db";

/// Get the database file path
///
/// Without an explicit directory the database lives in the platform data
/// directory: {DATA_DIR}/moviedb/moviedb.db
pub fn get_database_path(data_dir: Option<&Path>) -> AppResult<PathBuf> {
    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_dir()
            .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?
            .join("moviedb"),
    };

    std::fs::create_dir_all(&dir)?;

    Ok(dir.join(DATABASE_FILE))
}

/// Create a connection pool over the database at `db_path`
///
/// Every connection runs in WAL mode with a busy timeout, so a CLI run and a
/// long-lived process can share the file.
pub fn create_connection_pool(db_path: &Path, max_size: u32) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(max_size.max(1))
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::debug!("Opened connection pool for {}", db_path.display());

    Ok(pool)
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
#[cfg(test)]
pub(crate) fn create_test_connection() -> AppResult<rusqlite::Connection> {
    let conn = rusqlite::Connection::open_in_memory().map_err(AppError::Database)?;
    Ok(conn)
}
