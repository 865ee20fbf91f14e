//! Session Store
//!
//! Loads and saves the durable half of a session (stock and shopping list).
//! The move-to-shopping prompt is never stored.
//!
//! Ordinary edits touch a single row and go through the row-level
//! repositories. Anything larger rewrites both tables in one transaction.

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, FridgeItem, ItemId, ShoppingEntry};

use super::db::DbState;
use super::fridge_repo::{write_items, FridgeRepository};
use super::shopping_repo::{write_entries, ShoppingRepository};
use super::traits::Repository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredState {
    pub items: Vec<FridgeItem>,
    pub shopping: Vec<ShoppingEntry>,
}

/// Borrowed view of the stored lists, before or after a change
#[derive(Debug, Clone, Copy)]
pub struct Lists<'a> {
    pub items: &'a [FridgeItem],
    pub shopping: &'a [ShoppingEntry],
}

impl<'a> Lists<'a> {
    pub fn new(items: &'a [FridgeItem], shopping: &'a [ShoppingEntry]) -> Self {
        Self { items, shopping }
    }
}

/// Storage work needed to go from one pair of lists to the next
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Change<'a> {
    Unchanged,
    CreateItem(&'a FridgeItem),
    UpdateItem(&'a FridgeItem),
    DeleteItem(ItemId),
    AppendEntry(&'a ShoppingEntry),
    RemoveEntry(usize),
    Rewrite,
}

pub struct SessionStore {
    conn: Arc<Mutex<Connection>>,
    items: FridgeRepository,
    shopping: ShoppingRepository,
}

impl SessionStore {
    pub fn new(db: &DbState) -> Self {
        Self {
            conn: db.connection(),
            items: FridgeRepository::new(db.connection()),
            shopping: ShoppingRepository::new(db.connection()),
        }
    }

    pub fn items(&self) -> &FridgeRepository {
        &self.items
    }

    pub fn shopping(&self) -> &ShoppingRepository {
        &self.shopping
    }

    pub async fn load(&self) -> DomainResult<StoredState> {
        let items = self.items.list().await?;
        let shopping = self.shopping.list().await?;
        log::debug!("Loaded {} items, {} shopping entries", items.len(), shopping.len());
        Ok(StoredState { items, shopping })
    }

    /// Overwrite both tables; either both land or neither does
    pub async fn save(&self, items: &[FridgeItem], shopping: &[ShoppingEntry]) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        write_items(&tx, items)?;
        write_entries(&tx, shopping)?;
        tx.commit()?;
        Ok(())
    }

    /// Write only what differs between `before` and `after`
    pub async fn save_changes(&self, before: Lists<'_>, after: Lists<'_>) -> DomainResult<()> {
        match plan_change(before, after) {
            Change::Unchanged => Ok(()),
            Change::CreateItem(item) => self.items.create(item).await.map(|_| ()),
            Change::UpdateItem(item) => self.items.update(item).await.map(|_| ()),
            Change::DeleteItem(id) => self.items.delete(id).await,
            Change::AppendEntry(entry) => self.shopping.append(entry).await,
            Change::RemoveEntry(index) => self.shopping.remove_at(index).await.map(|_| ()),
            Change::Rewrite => {
                log::debug!("Rewriting stored session");
                self.save(after.items, after.shopping).await
            }
        }
    }
}

pub(super) fn plan_change<'a>(before: Lists<'_>, after: Lists<'a>) -> Change<'a> {
    let items_same = before.items == after.items;
    let shopping_same = before.shopping == after.shopping;

    match (items_same, shopping_same) {
        (true, true) => Change::Unchanged,
        (false, true) => plan_item_change(before.items, after.items),
        (true, false) => plan_entry_change(before.shopping, after.shopping),
        (false, false) => Change::Rewrite,
    }
}

fn plan_item_change<'a>(before: &[FridgeItem], after: &'a [FridgeItem]) -> Change<'a> {
    if let Some(item) = appended(before, after) {
        return Change::CreateItem(item);
    }
    if let Some(idx) = removed_index(before, after) {
        return Change::DeleteItem(before[idx].id);
    }
    if before.len() == after.len() {
        let mut changed = before.iter().zip(after).filter(|(b, a)| b != a);
        if let (Some((old, new)), None) = (changed.next(), changed.next()) {
            if old.id == new.id {
                return Change::UpdateItem(new);
            }
        }
    }
    Change::Rewrite
}

fn plan_entry_change<'a>(before: &[ShoppingEntry], after: &'a [ShoppingEntry]) -> Change<'a> {
    if let Some(entry) = appended(before, after) {
        return Change::AppendEntry(entry);
    }
    match removed_index(before, after) {
        Some(idx) => Change::RemoveEntry(idx),
        None => Change::Rewrite,
    }
}

/// `after` is `before` plus one trailing element
fn appended<'a, T: PartialEq>(before: &[T], after: &'a [T]) -> Option<&'a T> {
    match after.split_last() {
        Some((last, rest)) if rest == before => Some(last),
        _ => None,
    }
}

/// `after` is `before` with exactly one element taken out
fn removed_index<T: PartialEq>(before: &[T], after: &[T]) -> Option<usize> {
    if before.len() != after.len() + 1 {
        return None;
    }
    let idx = before
        .iter()
        .zip(after)
        .position(|(b, a)| b != a)
        .unwrap_or(after.len());
    (before[idx + 1..] == after[idx..]).then_some(idx)
}
