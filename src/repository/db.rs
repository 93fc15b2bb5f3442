//! Database-backed Key-Value Store
//!
//! SQLite implementation of [`KeyValueStore`]: a single two-column table,
//! created on open.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{DomainError, DomainResult};

use super::traits::KeyValueStore;

/// SQLite-backed store; one row per logical key
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the store at `path` and run migrations
    pub fn open<P: AsRef<Path>>(path: P) -> DomainResult<Self> {
        let conn = Connection::open(path).map_err(|e| DomainError::Storage(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// In-memory store, handy for tests and ephemeral sessions
    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DomainError::Storage(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> DomainResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| DomainError::Storage(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> DomainResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let conn = self.lock()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
            row.get::<_, String>(0)
        })
        .optional()
        .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(())
    }
}
