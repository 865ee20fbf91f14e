//! Fridge List Controller
//!
//! Owns the stocked items (insertion ordered) and the pending-removal prompt.

use crate::domain::{normalize_name, FridgeItem, ItemId};

use super::shopping_list::ShoppingList;

/// Result of a decrement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// Quantity lowered in place, new value
    Decremented(u32),
    /// Last unit taken, item removed and awaiting the shopping prompt
    Removed(FridgeItem),
    /// Would remove the item while another prompt is still open
    Blocked,
    NotFound,
}

impl DecrementOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, DecrementOutcome::Decremented(_) | DecrementOutcome::Removed(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct FridgeList {
    items: Vec<FridgeItem>,
    /// Set exactly while the move-to-shopping prompt is showing
    pending_removed: Option<FridgeItem>,
}

impl FridgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored items, dropping any that are out of stock
    pub fn from_items(items: Vec<FridgeItem>) -> Self {
        let items = items
            .into_iter()
            .filter(|item| {
                if item.quantity == 0 {
                    log::warn!("Dropping stored item {} with zero quantity", item.id);
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { items, pending_removed: None }
    }

    pub fn items(&self) -> &[FridgeItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&FridgeItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pending_removed(&self) -> Option<&FridgeItem> {
        self.pending_removed.as_ref()
    }

    pub fn is_showing_prompt(&self) -> bool {
        self.pending_removed.is_some()
    }

    /// Stock a new item with quantity 1
    ///
    /// Blank names are ignored.
    pub fn add_item(&mut self, name: &str) -> Option<ItemId> {
        let name = normalize_name(name)?;
        let item = FridgeItem::new(name);
        let id = item.id;
        log::debug!("Adding item {} ({})", item.name, id);
        self.items.push(item);
        Some(id)
    }

    /// Returns the new quantity, or `None` for an unknown id
    pub fn increment(&mut self, id: ItemId) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity = item.quantity.saturating_add(1);
        Some(item.quantity)
    }

    pub fn decrement(&mut self, id: ItemId) -> DecrementOutcome {
        let Some(idx) = self.items.iter().position(|item| item.id == id) else {
            return DecrementOutcome::NotFound;
        };

        if !self.items[idx].is_last_unit() {
            let item = &mut self.items[idx];
            item.quantity -= 1;
            return DecrementOutcome::Decremented(item.quantity);
        }

        if self.pending_removed.is_some() {
            log::warn!("Ignoring removal of {} while a prompt is open", id);
            return DecrementOutcome::Blocked;
        }

        let removed = self.items.remove(idx);
        log::debug!("Item {} ran out, prompting", removed.name);
        self.pending_removed = Some(removed.clone());
        DecrementOutcome::Removed(removed)
    }

    /// Answer the move-to-shopping prompt
    ///
    /// Returns the item the prompt was about, `None` when no prompt was open.
    pub fn resolve_prompt(&mut self, accept: bool, shopping: &mut ShoppingList) -> Option<FridgeItem> {
        let removed = self.pending_removed.take()?;
        if accept {
            shopping.add_entry(removed.name.clone());
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked(name: &str, quantity: u32) -> (FridgeList, ItemId) {
        let mut fridge = FridgeList::new();
        let id = fridge.add_item(name).unwrap();
        for _ in 1..quantity {
            fridge.increment(id);
        }
        (fridge, id)
    }

    #[test]
    fn test_add_item() {
        let mut fridge = FridgeList::new();
        let id = fridge.add_item("  Milk ").unwrap();

        assert_eq!(fridge.len(), 1);
        let item = fridge.get(id).unwrap();
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut fridge = FridgeList::new();
        assert_eq!(fridge.add_item("   "), None);
        assert_eq!(fridge.add_item(""), None);
        assert!(fridge.is_empty());
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut fridge = FridgeList::new();
        fridge.add_item("Milk");
        fridge.add_item("Eggs");
        fridge.add_item("Milk");

        let names: Vec<_> = fridge.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Eggs", "Milk"]);
        assert_ne!(fridge.items()[0].id, fridge.items()[2].id);
    }

    #[test]
    fn test_increment_then_decrement_restores() {
        let (mut fridge, id) = stocked("Cheese", 3);

        assert_eq!(fridge.increment(id), Some(4));
        assert_eq!(fridge.decrement(id), DecrementOutcome::Decremented(3));
        assert_eq!(fridge.get(id).unwrap().quantity, 3);
        assert!(!fridge.is_showing_prompt());
    }

    #[test]
    fn test_increment_saturates() {
        let mut full = FridgeItem::new("Rice".to_string());
        full.quantity = u32::MAX;
        let id = full.id;
        let mut fridge = FridgeList::from_items(vec![full]);

        assert_eq!(fridge.increment(id), Some(u32::MAX));
        assert_eq!(fridge.get(id).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (mut fridge, _) = stocked("Milk", 2);
        let before = fridge.items().to_vec();

        assert_eq!(fridge.increment(ItemId::new()), None);
        assert_eq!(fridge.decrement(ItemId::new()), DecrementOutcome::NotFound);
        assert_eq!(fridge.items(), before.as_slice());
    }

    #[test]
    fn test_mutation_does_not_reorder() {
        let mut fridge = FridgeList::new();
        let a = fridge.add_item("A").unwrap();
        let b = fridge.add_item("B").unwrap();
        fridge.increment(b);
        fridge.increment(a);
        fridge.decrement(b);

        let ids: Vec<_> = fridge.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_last_unit_removes_and_prompts() {
        let (mut fridge, id) = stocked("Yogurt", 1);
        let expected = fridge.get(id).unwrap().clone();

        assert_eq!(fridge.decrement(id), DecrementOutcome::Removed(expected.clone()));
        assert!(fridge.is_empty());
        assert!(fridge.is_showing_prompt());
        assert_eq!(fridge.pending_removed(), Some(&expected));
    }

    #[test]
    fn test_second_removal_blocked_while_prompting() {
        let mut fridge = FridgeList::new();
        let a = fridge.add_item("A").unwrap();
        let b = fridge.add_item("B").unwrap();

        assert!(matches!(fridge.decrement(a), DecrementOutcome::Removed(_)));
        assert_eq!(fridge.decrement(b), DecrementOutcome::Blocked);
        assert_eq!(fridge.len(), 1);
        assert_eq!(fridge.pending_removed().unwrap().id, a);
    }

    #[test]
    fn test_accept_moves_name_to_shopping() {
        let (mut fridge, id) = stocked("Milk", 1);
        let mut shopping = ShoppingList::new();
        fridge.decrement(id);

        let resolved = fridge.resolve_prompt(true, &mut shopping).unwrap();
        assert_eq!(resolved.name, "Milk");
        assert_eq!(shopping.list_entries().len(), 1);
        assert_eq!(shopping.list_entries()[0].name, "Milk");
        assert!(!fridge.is_showing_prompt());
        assert!(fridge.pending_removed().is_none());
    }

    #[test]
    fn test_decline_discards() {
        let (mut fridge, id) = stocked("Milk", 1);
        let mut shopping = ShoppingList::new();
        fridge.decrement(id);

        assert!(fridge.resolve_prompt(false, &mut shopping).is_some());
        assert!(shopping.is_empty());
        assert!(!fridge.is_showing_prompt());
        assert!(fridge.is_empty());
    }

    #[test]
    fn test_resolve_without_prompt_is_noop() {
        let mut fridge = FridgeList::new();
        let mut shopping = ShoppingList::new();
        assert!(fridge.resolve_prompt(true, &mut shopping).is_none());
        assert!(shopping.is_empty());
    }

    #[test]
    fn test_from_items_drops_empty_stock() {
        let mut empty = FridgeItem::new("Gone".to_string());
        empty.quantity = 0;
        let kept = FridgeItem::new("Kept".to_string());

        let fridge = FridgeList::from_items(vec![empty, kept.clone()]);
        assert_eq!(fridge.items(), &[kept]);
    }
}
