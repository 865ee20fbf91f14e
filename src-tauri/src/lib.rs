//! Fridge Control Backend
//!
//! Layered architecture:
//! - domain: Core entities and validation
//! - service: In-memory controllers (fridge, shopping list, add-item form, session)
//! - repository: Storage abstractions and SQLite implementations
//! - commands: Tauri command handlers (desktop feature)

mod config;
mod domain;
mod repository;
mod service;
mod state;

#[cfg(feature = "desktop")]
mod commands;
#[cfg(feature = "desktop")]
mod desktop;

pub use config::AppConfig;
pub use domain::{DomainError, DomainResult, Entity, FridgeItem, ItemId, ShoppingEntry};
pub use repository::{init_db, DbState, FridgeRepository, Repository, SessionStore, ShoppingRepository, StoredState};
pub use service::{
    AddFormSnapshot, AddItemForm, DecrementOutcome, FridgeList, FridgeSession, SessionSnapshot,
    ShoppingList, SubscriptionId,
};
pub use state::AppState;

#[cfg(feature = "desktop")]
pub use desktop::{run, SESSION_CHANGED_EVENT};
