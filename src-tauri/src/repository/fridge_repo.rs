//! Fridge Item Repository
//!
//! SQLite-backed storage for stocked items. Row order follows `position`,
//! which mirrors the in-memory insertion order.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, FridgeItem, ItemId};
use super::traits::Repository;

const SELECT_ITEM: &str = "SELECT id, name, quantity, created_at FROM fridge_items";

type ItemRow = (String, String, u32, i64);

/// SQLite implementation of the fridge item repository
pub struct FridgeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl FridgeRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

/// Replace every stored item inside an open transaction
pub(super) fn write_items(tx: &Transaction<'_>, items: &[FridgeItem]) -> DomainResult<()> {
    tx.execute("DELETE FROM fridge_items", [])?;
    let mut insert = tx.prepare(
        "INSERT INTO fridge_items (id, name, quantity, position, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for (position, item) in items.iter().enumerate() {
        insert.execute(params![
            item.id.to_string(),
            item.name,
            item.quantity,
            position as i64,
            item.created_at
        ])?;
    }
    Ok(())
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ItemRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

/// Convert a database row to FridgeItem
fn row_to_item((id, name, quantity, created_at): ItemRow) -> DomainResult<FridgeItem> {
    Ok(FridgeItem {
        id: id.parse::<ItemId>()?,
        name,
        quantity,
        created_at,
    })
}

#[async_trait]
impl Repository<FridgeItem> for FridgeRepository {
    async fn create(&self, entity: &FridgeItem) -> DomainResult<FridgeItem> {
        if entity.quantity == 0 {
            return Err(DomainError::InvalidInput(format!(
                "{} has no stock",
                entity.name
            )));
        }

        let conn = self.conn.lock().await;
        let position: i64 = conn.query_row(
            "SELECT COALESCE(MAX(position), -1) + 1 FROM fridge_items",
            [],
            |row| row.get(0),
        )?;

        conn.execute(
            "INSERT INTO fridge_items (id, name, quantity, position, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entity.id.to_string(),
                entity.name,
                entity.quantity,
                position,
                entity.created_at
            ],
        )?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: ItemId) -> DomainResult<Option<FridgeItem>> {
        let conn = self.conn.lock().await;
        let row = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_ITEM),
                params![id.to_string()],
                read_row,
            )
            .optional()?;

        row.map(row_to_item).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<FridgeItem>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("{} ORDER BY position ASC", SELECT_ITEM))?;
        let rows = stmt.query_map([], read_row)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row_to_item(row?)?);
        }
        Ok(items)
    }

    async fn update(&self, entity: &FridgeItem) -> DomainResult<FridgeItem> {
        if entity.quantity == 0 {
            return Err(DomainError::InvalidInput(format!(
                "{} has no stock",
                entity.name
            )));
        }

        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE fridge_items SET name = ?1, quantity = ?2 WHERE id = ?3",
            params![entity.name, entity.quantity, entity.id.to_string()],
        )?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Item {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: ItemId) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM fridge_items WHERE id = ?1", params![id.to_string()])?;
        Ok(())
    }
}
