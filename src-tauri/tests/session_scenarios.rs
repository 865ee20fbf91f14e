//! End-to-end fridge/shopping flows through the public session API.

use fridge_control_lib::{AppState, DecrementOutcome, FridgeSession, ItemId, ShoppingEntry};

#[test]
fn test_milk_lifecycle() {
    let mut session = FridgeSession::new();

    let id = session.add_item("Milk").expect("valid name");
    let snap = session.snapshot();
    assert_eq!(snap.items.len(), 1);
    assert_eq!(snap.items[0].name, "Milk");
    assert_eq!(snap.items[0].quantity, 1);

    assert_eq!(session.increment(id), Some(2));
    assert_eq!(session.decrement(id), DecrementOutcome::Decremented(1));

    let removed = match session.decrement(id) {
        DecrementOutcome::Removed(item) => item,
        other => panic!("expected removal, got {:?}", other),
    };
    let snap = session.snapshot();
    assert!(snap.items.is_empty());
    assert!(snap.is_showing_prompt);
    assert_eq!(snap.pending_removed, Some(removed));
    assert_eq!(snap.pending_removed.as_ref().unwrap().name, "Milk");
    assert_eq!(snap.pending_removed.as_ref().unwrap().quantity, 1);

    session.resolve_prompt(true);
    let snap = session.snapshot();
    assert_eq!(snap.shopping, vec![ShoppingEntry::new("Milk")]);
    assert!(!snap.is_showing_prompt);
    assert!(snap.pending_removed.is_none());
}

#[test]
fn test_declined_prompt_appends_nothing() {
    let mut session = FridgeSession::new();
    let id = session.add_item("Eggs").unwrap();
    session.decrement(id);

    session.resolve_prompt(false);
    let snap = session.snapshot();
    assert!(snap.shopping.is_empty());
    assert!(snap.items.is_empty());
    assert!(!snap.is_showing_prompt);
}

#[test]
fn test_whitespace_name_ignored() {
    let mut session = FridgeSession::new();
    assert!(session.add_item("   ").is_none());
    assert!(session.snapshot().items.is_empty());
}

#[test]
fn test_unknown_id_ignored() {
    let mut session = FridgeSession::new();
    session.add_item("Milk");
    let before = session.snapshot();

    assert_eq!(session.increment(ItemId::new()), None);
    assert_eq!(session.decrement(ItemId::new()), DecrementOutcome::NotFound);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_increment_decrement_round_trip_for_many_quantities() {
    for start in 2..8u32 {
        let mut session = FridgeSession::new();
        let id = session.add_item("Water").unwrap();
        for _ in 1..start {
            session.increment(id);
        }

        session.increment(id);
        session.decrement(id);

        let item = session.fridge().get(id).expect("still stocked");
        assert_eq!(item.quantity, start);
    }
}

#[test]
fn test_every_stocked_item_has_quantity() {
    let mut session = FridgeSession::new();
    let ids: Vec<_> = ["A", "B", "C"].iter().filter_map(|n| session.add_item(n)).collect();
    for id in &ids {
        session.decrement(*id);
        session.resolve_prompt(true);
    }

    assert!(session.snapshot().items.iter().all(|i| i.quantity >= 1));
    let names: Vec<_> = session.shopping().list_entries().iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_app_state_over_ipc_ids() {
    let state = AppState::in_memory();
    let snap = state.apply(|s| s.add_item("Cheese").is_some()).await;
    let id = snap.items[0].id.to_string();

    let snap = state
        .apply_to_item(&id, |s, id| s.decrement(id).changed())
        .await;
    assert!(snap.is_showing_prompt);

    let snap = state.apply(|s| s.resolve_prompt(true).is_some()).await;
    assert_eq!(snap.shopping, vec![ShoppingEntry::new("Cheese")]);
}
