//! Shopping Entry Repository
//!
//! Entries have no identity of their own, so the API is positional.

use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, ShoppingEntry};

pub struct ShoppingRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ShoppingRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    pub async fn append(&self, entry: &ShoppingEntry) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO shopping_entries (name, position)
             SELECT ?1, COALESCE(MAX(position), -1) + 1 FROM shopping_entries",
            params![entry.name],
        )?;
        Ok(())
    }

    pub async fn list(&self) -> DomainResult<Vec<ShoppingEntry>> {
        let conn = self.conn.lock().await;
        let mut stmt =
            conn.prepare("SELECT name FROM shopping_entries ORDER BY position ASC, id ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut entries = Vec::new();
        for name in rows {
            entries.push(ShoppingEntry::new(name?));
        }
        Ok(entries)
    }

    /// Remove the entry at `index` in list order
    pub async fn remove_at(&self, index: usize) -> DomainResult<Option<ShoppingEntry>> {
        let conn = self.conn.lock().await;
        let found = conn
            .query_row(
                "SELECT id, name FROM shopping_entries ORDER BY position ASC, id ASC LIMIT 1 OFFSET ?1",
                params![index as i64],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        let Some((id, name)) = found else {
            return Ok(None);
        };
        conn.execute("DELETE FROM shopping_entries WHERE id = ?1", params![id])?;
        Ok(Some(ShoppingEntry::new(name)))
    }
}

/// Replace every stored entry inside an open transaction
pub(super) fn write_entries(tx: &Transaction<'_>, entries: &[ShoppingEntry]) -> DomainResult<()> {
    tx.execute("DELETE FROM shopping_entries", [])?;
    let mut insert = tx.prepare("INSERT INTO shopping_entries (name, position) VALUES (?1, ?2)")?;
    for (position, entry) in entries.iter().enumerate() {
        insert.execute(params![entry.name, position as i64])?;
    }
    Ok(())
}
