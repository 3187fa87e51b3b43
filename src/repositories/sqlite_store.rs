// src/repositories/sqlite_store.rs
//
// Key-value store backed by the `kv_store` table

use std::sync::Arc;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::storage::KeyValueStore;
use crate::db::{get_connection, ConnectionPool};
use crate::error::AppResult;

pub struct SqliteStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteStore {
    /// The schema must already be initialized on `pool`
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
