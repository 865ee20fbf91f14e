//! Fridge Item Entity
//!
//! A stocked item with a positive quantity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, Entity};

/// Opaque item identifier, generated once and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidInput(format!("bad item id: {}", s)))
    }
}

/// Trim a user supplied name, rejecting blank input
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// An item currently in the fridge
///
/// `quantity` is at least 1 for as long as the item is stocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    /// Unix seconds
    pub created_at: i64,
}

impl FridgeItem {
    /// Create a freshly stocked item (quantity 1)
    ///
    /// `name` must already be normalized.
    pub fn new(name: String) -> Self {
        Self {
            id: ItemId::new(),
            name,
            quantity: 1,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Whether one more decrement removes the item
    pub fn is_last_unit(&self) -> bool {
        self.quantity <= 1
    }
}

impl Entity for FridgeItem {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = FridgeItem::new("Milk".to_string());
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 1);
        assert!(item.is_last_unit());
        assert!(item.created_at > 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = FridgeItem::new("Eggs".to_string());
        let b = FridgeItem::new("Eggs".to_string());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_item_id_parse() {
        let id = ItemId::new();
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("nonexistent-id".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Milk \n"), Some("Milk".to_string()));
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name(""), None);
    }

    #[test]
    fn test_wire_format() {
        let item = FridgeItem::new("Butter".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Butter");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["id"], item.id.to_string());
        assert!(json.get("createdAt").is_some());
    }
}
