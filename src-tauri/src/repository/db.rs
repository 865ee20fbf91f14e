//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Connection>>,
}

impl DbState {
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}

/// Open (or create) the database at `db_path` and migrate it
///
/// `:memory:` gives a private in-memory database.
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let path: PathBuf = db_path.to_path_buf();

    let conn = tokio::task::spawn_blocking(move || -> DomainResult<Connection> {
        let conn = Connection::open(&path)?;
        run_migrations(&conn)?;
        Ok(conn)
    })
    .await
    .map_err(|e| DomainError::Storage(format!("DB init task failed: {}", e)))??;

    log::info!("Database ready at {}", db_path.display());

    Ok(DbState {
        conn: Arc::new(Mutex::new(conn)),
    })
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in names {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS fridge_items (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity >= 1),
            position INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS shopping_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            position INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS idx_fridge_items_position ON fridge_items(position);",
    )?;

    // Added after the first release
    if !column_exists(conn, "fridge_items", "created_at")? {
        conn.execute(
            "ALTER TABLE fridge_items ADD COLUMN created_at INTEGER NOT NULL DEFAULT 0",
            [],
        )
        .map_err(|e| DomainError::Storage(format!("Failed to add created_at: {}", e)))?;
    }

    Ok(())
}
