//! Shopping List Controller

use crate::domain::ShoppingEntry;

/// Names queued for purchase, in the order they were added
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    entries: Vec<ShoppingEntry>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ShoppingEntry>) -> Self {
        Self { entries }
    }

    /// Append a name. Duplicates are kept.
    pub fn add_entry(&mut self, name: impl Into<String>) {
        let entry = ShoppingEntry::new(name);
        log::debug!("Shopping list += {}", entry.name);
        self.entries.push(entry);
    }

    pub fn remove_entry(&mut self, index: usize) -> Option<ShoppingEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn list_entries(&self) -> &[ShoppingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
