//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to the session.
//! Every mutating command answers with the resulting snapshot.

mod fridge_cmd;
mod log_cmd;
mod shopping_cmd;

pub use fridge_cmd::*;
pub use log_cmd::*;
pub use shopping_cmd::*;
