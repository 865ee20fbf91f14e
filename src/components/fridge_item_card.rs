//! Fridge Item Card Component

use leptos::prelude::*;

use crate::commands;
use crate::models::FridgeItem;
use crate::store::{store_dispatch, use_app_store};

/// One stocked item with − / + controls
#[component]
pub fn FridgeItemCard(item: FridgeItem) -> impl IntoView {
    let store = use_app_store();

    let decrement_id = item.id.clone();
    let increment_id = item.id.clone();

    view! {
        <div class="item-card">
            <div class="item-name">{item.name.clone()}</div>
            <div class="item-subtitle">"Em estoque"</div>

            <div class="item-controls">
                <button
                    class="qty-btn"
                    aria-label="Remover um"
                    on:click=move |_| store_dispatch(store, "decrement_item", commands::decrement_item(decrement_id.clone()))
                >
                    "−"
                </button>

                <span class="qty">{item.quantity}</span>

                <button
                    class="qty-btn"
                    aria-label="Adicionar um"
                    on:click=move |_| store_dispatch(store, "increment_item", commands::increment_item(increment_id.clone()))
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
