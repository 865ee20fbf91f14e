//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO behavior beyond construction and validation.

mod entity;
mod item;
mod shopping;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{FridgeItem, ItemId, normalize_name};
pub use shopping::ShoppingEntry;
