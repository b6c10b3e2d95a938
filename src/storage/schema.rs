//! Database schema and connection management

use crate::error::{QbError, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

/// Handle to the quarterback store.
///
/// The connection is guarded by a mutex so one handle can be shared across
/// request handlers; each query holds the lock for a single statement.
pub struct QuarterbackDatabase {
    pub(crate) conn: Mutex<Connection>,
}

impl QuarterbackDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!(path = %path.display(), "opening quarterback database");
        let conn = Connection::open(path)?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by tests and throwaway runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Mutex::new(conn),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default location: `<cache dir>/qb-stats/quarterbacks.db`
    pub fn default_path() -> PathBuf {
        let base = dirs::cache_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".cache");
            home
        });
        base.join("qb-stats").join("quarterbacks.db")
    }

    /// Run `f` against the store on tokio's blocking pool.
    pub async fn blocking<T, F>(self: &Arc<Self>, f: F) -> Result<T>
    where
        F: FnOnce(&QuarterbackDatabase) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(self);
        tokio::task::spawn_blocking(move || f(&store)).await?
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| QbError::LockPoisoned)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        let conn = self.conn()?;

        // `name` is the natural key; UNIQUE backs upsert-by-name
        conn.execute(
            "CREATE TABLE IF NOT EXISTS quarterbacks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                team TEXT NOT NULL,
                touchdowns INTEGER,
                interceptions INTEGER,
                qbr REAL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_quarterbacks_team
             ON quarterbacks(team)",
            [],
        )?;

        debug!("quarterback schema ready");
        Ok(())
    }
}
