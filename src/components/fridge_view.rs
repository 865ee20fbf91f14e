//! Fridge View Component
//!
//! Header with the add button, the stocked item cards, the add-item sheet
//! and the move-to-shopping prompt.

use leptos::prelude::*;

use crate::commands;
use crate::store::{store_dispatch, store_items, use_app_store};
use crate::components::{AddItemSheet, FridgeItemCard, MoveToShoppingPrompt};

#[component]
pub fn FridgeView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="fridge-view">
            <header class="fridge-header">
                <h1>"Minha Geladeira"</h1>
                <button
                    class="add-btn"
                    aria-label="Adicionar item"
                    on:click=move |_| store_dispatch(store, "open_add_item_form", commands::open_add_item_form())
                >
                    "+"
                </button>
            </header>

            <Show
                when=move || !store_items(&store).is_empty()
                fallback=|| view! { <p class="empty-hint">"Nenhum item adicionado"</p> }
            >
                <div class="item-list">
                    <For
                        each=move || store_items(&store)
                        // Quantity is part of the key so the card re-renders on change
                        key=|item| (item.id.clone(), item.quantity)
                        children=move |item| view! { <FridgeItemCard item=item /> }
                    />
                </div>
            </Show>

            <AddItemSheet />
            <MoveToShoppingPrompt />
        </section>
    }
}
