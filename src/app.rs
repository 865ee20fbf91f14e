//! Fridge Control Frontend App
//!
//! Two tabs: fridge stock and shopping list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::context::{AppContext, Tab};
use crate::store::{store_apply_snapshot, store_dispatch, AppState};
use crate::components::{FridgeView, ShoppingView, TabBar};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (current_tab, set_current_tab) = signal(Tab::Fridge);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((current_tab, set_current_tab)));

    // Load the session on mount
    Effect::new(move |_| {
        web_sys::console::log_1(&"[APP] Loading session".into());
        store_dispatch(store, "get_snapshot", commands::get_snapshot());
    });

    // Mirror changes pushed by the backend
    spawn_local(async move {
        commands::listen_session_changed(move |snapshot| {
            store_apply_snapshot(&store, snapshot);
        })
        .await;
    });

    view! {
        <div class="app-container">
            <main class="tab-content">
                {move || match current_tab.get() {
                    Tab::Fridge => view! { <FridgeView /> }.into_any(),
                    Tab::Shopping => view! { <ShoppingView /> }.into_any(),
                }}
            </main>

            <TabBar />
        </div>
    }
}
