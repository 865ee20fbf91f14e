//! Application State
//!
//! The live session plus optional write-through storage, shared across
//! commands. Every mutation runs under the session lock and is saved before
//! the lock is released. Only the fridge and shopping lists are stored, so
//! form and prompt changes never reach the database.

use std::path::Path;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, ItemId};
use crate::repository::{init_db, Lists, SessionStore};
use crate::service::{FridgeSession, SessionSnapshot, SubscriptionId};

pub struct AppState {
    session: Mutex<FridgeSession>,
    store: Option<SessionStore>,
}

impl AppState {
    /// Session without storage; everything is lost on exit
    pub fn in_memory() -> Self {
        Self {
            session: Mutex::new(FridgeSession::new()),
            store: None,
        }
    }

    /// Open the database at `db_path` and restore the last saved session
    pub async fn open(db_path: &Path) -> DomainResult<Self> {
        let db = init_db(db_path).await?;
        let store = SessionStore::new(&db);
        let stored = store.load().await?;
        log::info!(
            "Restored {} items and {} shopping entries",
            stored.items.len(),
            stored.shopping.len()
        );

        Ok(Self {
            session: Mutex::new(FridgeSession::restore(stored.items, stored.shopping)),
            store: Some(store),
        })
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.session.lock().await.subscribe(observer)
    }

    /// Run `f` against the session, saving when it reports a change
    pub async fn apply<F>(&self, f: F) -> SessionSnapshot
    where
        F: FnOnce(&mut FridgeSession) -> bool,
    {
        let mut session = self.session.lock().await;
        let before = session.snapshot();
        let changed = f(&mut session);
        let snapshot = session.snapshot();

        if changed {
            if let Some(store) = &self.store {
                let before = Lists::new(&before.items, &before.shopping);
                let after = Lists::new(&snapshot.items, &snapshot.shopping);
                // In-memory state stays authoritative if the write fails
                if let Err(e) = store.save_changes(before, after).await {
                    log::error!("Failed to save session: {}", e);
                }
            }
        }
        snapshot
    }

    /// Like `apply`, for operations addressed by a wire id
    ///
    /// Malformed ids are treated as unknown ones.
    pub async fn apply_to_item<F>(&self, raw_id: &str, f: F) -> SessionSnapshot
    where
        F: FnOnce(&mut FridgeSession, ItemId) -> bool,
    {
        match raw_id.parse::<ItemId>() {
            Ok(id) => self.apply(|session| f(session, id)).await,
            Err(e) => {
                log::debug!("{}", e);
                self.snapshot().await
            }
        }
    }
}
