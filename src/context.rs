//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Bottom tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Fridge,
    Shopping,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Selected tab - read
    pub current_tab: ReadSignal<Tab>,
    /// Selected tab - write
    set_current_tab: WriteSignal<Tab>,
}

impl AppContext {
    pub fn new(current_tab: (ReadSignal<Tab>, WriteSignal<Tab>)) -> Self {
        Self {
            current_tab: current_tab.0,
            set_current_tab: current_tab.1,
        }
    }

    /// Switch tabs
    pub fn select(&self, tab: Tab) {
        self.set_current_tab.set(tab);
    }
}
