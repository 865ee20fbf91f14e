//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The backend owns
//! the session; the store only mirrors the latest snapshot.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use crate::models::{FridgeItem, SessionSnapshot, ShoppingEntry};

/// Mirrored session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Stocked items, in insertion order
    pub items: Vec<FridgeItem>,
    /// Shopping list entries
    pub shopping: Vec<ShoppingEntry>,
    /// Item awaiting the move-to-shopping answer
    pub pending_removed: Option<FridgeItem>,
    /// Whether the add-item sheet is showing
    pub add_form_open: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the mirrored state with a fresh snapshot
pub fn store_apply_snapshot(store: &AppStore, snapshot: SessionSnapshot) {
    *store.items().write() = snapshot.items;
    *store.shopping().write() = snapshot.shopping;
    *store.pending_removed().write() = snapshot.pending_removed;
    *store.add_form_open().write() = snapshot.add_form.open;
}

pub fn store_set_shopping(store: &AppStore, entries: Vec<ShoppingEntry>) {
    *store.shopping().write() = entries;
}

pub fn store_items(store: &AppStore) -> Vec<FridgeItem> {
    store.items().get()
}

pub fn store_shopping(store: &AppStore) -> Vec<ShoppingEntry> {
    store.shopping().get()
}

pub fn store_pending_removed(store: &AppStore) -> Option<FridgeItem> {
    store.pending_removed().get()
}

pub fn store_add_form_open(store: &AppStore) -> bool {
    store.add_form_open().get()
}

/// Run a backend command and mirror the snapshot it returns
pub fn store_dispatch<F>(store: AppStore, label: &'static str, command: F)
where
    F: Future<Output = Result<SessionSnapshot, String>> + 'static,
{
    spawn_local(async move {
        match command.await {
            Ok(snapshot) => store_apply_snapshot(&store, snapshot),
            Err(e) => web_sys::console::error_1(&format!("[{}] {}", label, e).into()),
        }
    });
}
