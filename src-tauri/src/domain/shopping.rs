//! Shopping Entry
//!
//! A name queued for purchase. No identity and no quantity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingEntry {
    pub name: String,
}

impl ShoppingEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for ShoppingEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
