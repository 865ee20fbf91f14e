//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Stocked item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub created_at: i64,
}

/// Shopping list entry, sent as a bare string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingEntry {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddFormState {
    pub open: bool,
    pub text: String,
}

/// Whole session as returned by every mutating command
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub items: Vec<FridgeItem>,
    pub shopping: Vec<ShoppingEntry>,
    pub pending_removed: Option<FridgeItem>,
    pub is_showing_prompt: bool,
    pub add_form: AddFormState,
}
