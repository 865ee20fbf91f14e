//! Add-Item Form
//!
//! Text buffer behind the "add item" sheet.

use crate::domain::{normalize_name, ItemId};

use super::fridge_list::FridgeList;

#[derive(Debug, Clone, Default)]
pub struct AddItemForm {
    text: String,
    open: bool,
}

impl AddItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Submit is only offered for non-blank text
    pub fn can_submit(&self) -> bool {
        normalize_name(&self.text).is_some()
    }

    /// Add the buffered name to the fridge, then clear and close
    ///
    /// Blank text leaves everything untouched.
    pub fn submit(&mut self, fridge: &mut FridgeList) -> Option<ItemId> {
        if !self.can_submit() {
            return None;
        }
        let id = fridge.add_item(&self.text)?;
        self.cancel();
        Some(id)
    }

    pub fn cancel(&mut self) {
        self.text.clear();
        self.open = false;
    }
}
