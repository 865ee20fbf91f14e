//! Fridge Session
//!
//! State-owning controller for one app session. Wraps the fridge, the
//! shopping list and the add-item form, hands out serializable snapshots and
//! notifies subscribers after every effective change.

use serde::{Deserialize, Serialize};

use crate::domain::{FridgeItem, ItemId, ShoppingEntry};

use super::add_item_form::AddItemForm;
use super::fridge_list::{DecrementOutcome, FridgeList};
use super::shopping_list::ShoppingList;

pub type SubscriptionId = u64;

type Observer = Box<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Add-item sheet state as seen by the UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFormSnapshot {
    pub open: bool,
    pub text: String,
}

/// Read-only view of the whole session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub items: Vec<FridgeItem>,
    pub shopping: Vec<ShoppingEntry>,
    pub pending_removed: Option<FridgeItem>,
    pub is_showing_prompt: bool,
    pub add_form: AddFormSnapshot,
}

#[derive(Default)]
pub struct FridgeSession {
    fridge: FridgeList,
    shopping: ShoppingList,
    add_form: AddItemForm,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl FridgeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded from stored state. No prompt is open.
    pub fn restore(items: Vec<FridgeItem>, shopping: Vec<ShoppingEntry>) -> Self {
        Self {
            fridge: FridgeList::from_items(items),
            shopping: ShoppingList::from_entries(shopping),
            ..Self::default()
        }
    }

    pub fn fridge(&self) -> &FridgeList {
        &self.fridge
    }

    pub fn shopping(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn add_form(&self) -> &AddItemForm {
        &self.add_form
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            items: self.fridge.items().to_vec(),
            shopping: self.shopping.list_entries().to_vec(),
            pending_removed: self.fridge.pending_removed().cloned(),
            is_showing_prompt: self.fridge.is_showing_prompt(),
            add_form: AddFormSnapshot {
                open: self.add_form.is_open(),
                text: self.add_form.text().to_string(),
            },
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.next_subscription += 1;
        let id = self.next_subscription;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in &self.observers {
            observer(&snapshot);
        }
    }

    fn notify_if(&self, changed: bool) -> bool {
        if changed {
            self.notify();
        }
        changed
    }

    // ========================
    // Fridge
    // ========================

    pub fn add_item(&mut self, name: &str) -> Option<ItemId> {
        let id = self.fridge.add_item(name);
        self.notify_if(id.is_some());
        id
    }

    pub fn increment(&mut self, id: ItemId) -> Option<u32> {
        let quantity = self.fridge.increment(id);
        self.notify_if(quantity.is_some());
        quantity
    }

    pub fn decrement(&mut self, id: ItemId) -> DecrementOutcome {
        let outcome = self.fridge.decrement(id);
        self.notify_if(outcome.changed());
        outcome
    }

    pub fn resolve_prompt(&mut self, accept: bool) -> Option<FridgeItem> {
        let resolved = self.fridge.resolve_prompt(accept, &mut self.shopping);
        self.notify_if(resolved.is_some());
        resolved
    }

    // ========================
    // Shopping list
    // ========================

    pub fn add_shopping_entry(&mut self, name: &str) -> bool {
        let Some(name) = crate::domain::normalize_name(name) else {
            return false;
        };
        self.shopping.add_entry(name);
        self.notify_if(true)
    }

    pub fn remove_shopping_entry(&mut self, index: usize) -> Option<ShoppingEntry> {
        let removed = self.shopping.remove_entry(index);
        self.notify_if(removed.is_some());
        removed
    }

    // ========================
    // Add-item form
    // ========================

    pub fn open_add_form(&mut self) -> bool {
        let changed = !self.add_form.is_open();
        self.add_form.open();
        self.notify_if(changed)
    }

    pub fn set_add_form_text(&mut self, text: &str) -> bool {
        let changed = self.add_form.text() != text;
        self.add_form.set_text(text);
        self.notify_if(changed)
    }

    pub fn submit_add_form(&mut self) -> Option<ItemId> {
        let id = self.add_form.submit(&mut self.fridge);
        self.notify_if(id.is_some());
        id
    }

    pub fn cancel_add_form(&mut self) -> bool {
        let changed = self.add_form.is_open() || !self.add_form.text().is_empty();
        self.add_form.cancel();
        self.notify_if(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn counting(session: &mut FridgeSession) -> (SubscriptionId, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let id = session.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (id, count)
    }

    #[test]
    fn test_snapshot_tracks_prompt() {
        let mut session = FridgeSession::new();
        let id = session.add_item("Milk").unwrap();
        session.decrement(id);

        let snap = session.snapshot();
        assert!(snap.items.is_empty());
        assert!(snap.is_showing_prompt);
        assert_eq!(snap.pending_removed.as_ref().unwrap().name, "Milk");

        session.resolve_prompt(true);
        let snap = session.snapshot();
        assert!(!snap.is_showing_prompt);
        assert!(snap.pending_removed.is_none());
        assert_eq!(snap.shopping, vec![ShoppingEntry::new("Milk")]);
    }

    #[test]
    fn test_observers_fire_only_on_change() {
        let mut session = FridgeSession::new();
        let (_, count) = counting(&mut session);

        session.add_item("   ");
        session.increment(ItemId::new());
        session.resolve_prompt(true);
        session.remove_shopping_entry(0);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let id = session.add_item("Eggs").unwrap();
        session.increment(id);
        session.decrement(id);
        assert_eq!(count.load(Ordering::SeqCst), 3);

        // A second last-unit removal waits for the open prompt
        let ham = session.add_item("Ham").unwrap();
        session.decrement(id);
        assert_eq!(count.load(Ordering::SeqCst), 5);
        assert_eq!(session.decrement(ham), DecrementOutcome::Blocked);
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_observer_sees_new_state() {
        let mut session = FridgeSession::new();
        let last = Arc::new(Mutex::new(None));
        let sink = last.clone();
        session.subscribe(move |snap| {
            *sink.lock().unwrap() = Some(snap.clone());
        });

        session.add_item("Ham");
        let snap = last.lock().unwrap().clone().unwrap();
        assert_eq!(snap.items.len(), 1);
        assert_eq!(snap.items[0].name, "Ham");
    }

    #[test]
    fn test_unsubscribe() {
        let mut session = FridgeSession::new();
        let (id, count) = counting(&mut session);

        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.add_item("Milk");
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_form_flow() {
        let mut session = FridgeSession::new();
        assert!(session.open_add_form());
        assert!(!session.open_add_form());
        session.set_add_form_text("  Lettuce ");
        assert!(session.snapshot().add_form.open);

        let id = session.submit_add_form().unwrap();
        assert_eq!(session.fridge().get(id).unwrap().name, "Lettuce");
        assert_eq!(session.snapshot().add_form, AddFormSnapshot::default());
    }

    #[test]
    fn test_cancel_form() {
        let mut session = FridgeSession::new();
        session.open_add_form();
        session.set_add_form_text("Soda");
        assert!(session.cancel_add_form());
        assert!(!session.cancel_add_form());
        assert!(session.fridge().is_empty());
    }

    #[test]
    fn test_manual_shopping_entry() {
        let mut session = FridgeSession::new();
        assert!(!session.add_shopping_entry("  "));
        assert!(session.add_shopping_entry(" Bread "));
        assert_eq!(session.shopping().list_entries()[0].name, "Bread");
    }

    #[test]
    fn test_restore() {
        let item = FridgeItem::new("Milk".to_string());
        let session = FridgeSession::restore(vec![item.clone()], vec!["Eggs".into()]);

        let snap = session.snapshot();
        assert_eq!(snap.items, vec![item]);
        assert_eq!(snap.shopping, vec![ShoppingEntry::new("Eggs")]);
        assert!(!snap.is_showing_prompt);
    }

    #[test]
    fn test_snapshot_wire_names() {
        let session = FridgeSession::new();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert!(json.get("pendingRemoved").is_some());
        assert_eq!(json["isShowingPrompt"], false);
        assert_eq!(json["addForm"]["open"], false);
    }
}
