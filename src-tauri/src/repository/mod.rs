//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod fridge_repo;
mod shopping_repo;
mod session_store;


pub use traits::Repository;
pub use db::{init_db, DbState};
pub use fridge_repo::FridgeRepository;
pub use shopping_repo::ShoppingRepository;
pub use session_store::{Lists, SessionStore, StoredState};
