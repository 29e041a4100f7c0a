//! SQLite storage backend.
//!
//! Each record type gets its own table (named after [`Record::COLLECTION`])
//! with the record body stored as JSON. Every store owns its own connection,
//! so writes to one collection never wait on another.

use super::{Record, RecordStore, StorageError};
use rusqlite::{Connection, OptionalExtension, params};
use std::marker::PhantomData;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Durable record store backed by a SQLite database file.
pub struct SqliteStore<R> {
    conn: Mutex<Connection>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> SqliteStore<R> {
    /// Open (or create) the store inside the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| {
            StorageError::ConnectionError(format!(
                "Failed to open database {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::with_connection(conn)
    }

    /// Open a private in-memory database. Contents vanish when the store is dropped.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id TEXT PRIMARY KEY,
                    body TEXT NOT NULL
                )",
                R::COLLECTION
            ),
            [],
        )?;
        debug!("Initialized SQLite table {}", R::COLLECTION);

        Ok(Self {
            conn: Mutex::new(conn),
            _record: PhantomData,
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Poisoned(R::COLLECTION.to_string()))
    }

    fn decode(id: &str, body: &str) -> Result<R, StorageError> {
        serde_json::from_str(body).map_err(|e| StorageError::Serialization {
            collection: R::COLLECTION.to_string(),
            record_id: id.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<R: Record> RecordStore<R> for SqliteStore<R> {
    fn get(&self, key: &str) -> Result<Option<R>, StorageError> {
        let conn = self.lock()?;
        let body: Option<String> = conn
            .query_row(
                &format!("SELECT body FROM {} WHERE id = ?1", R::COLLECTION),
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        body.map(|body| Self::decode(key, &body)).transpose()
    }

    fn insert(&self, key: &str, record: R) -> Result<(), StorageError> {
        let body = serde_json::to_string(&record).map_err(|e| StorageError::Serialization {
            collection: R::COLLECTION.to_string(),
            record_id: key.to_string(),
            reason: e.to_string(),
        })?;

        let conn = self.lock()?;
        conn.execute(
            &format!(
                "INSERT OR REPLACE INTO {} (id, body) VALUES (?1, ?2)",
                R::COLLECTION
            ),
            params![key, body],
        )?;
        Ok(())
    }

    fn values(&self) -> Result<Vec<R>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT id, body FROM {}", R::COLLECTION))?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, body) = row?;
            records.push(Self::decode(&id, &body)?);
        }
        Ok(records)
    }

    fn len(&self) -> Result<usize, StorageError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", R::COLLECTION),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
