//! Move-to-Shopping Prompt Component
//!
//! Shown after the last unit of an item is taken. Confirm adds the name to
//! the shopping list; cancel just dismisses.

use leptos::prelude::*;

use crate::commands;
use crate::store::{store_dispatch, store_pending_removed, use_app_store};

#[component]
pub fn MoveToShoppingPrompt() -> impl IntoView {
    let store = use_app_store();

    let resolve = move |accept: bool| {
        store_dispatch(store, "resolve_prompt", commands::resolve_prompt(accept));
    };

    move || {
        store_pending_removed(&store).map(|removed| {
            view! {
                <div class="prompt-backdrop">
                    <div class="prompt" role="alertdialog">
                        <h3>"Adicionar à lista de compras?"</h3>
                        <p>{format!("Deseja adicionar {} à lista de compras?", removed.name)}</p>
                        <div class="prompt-actions">
                            <button class="cancel-btn" on:click=move |_| resolve(false)>"Cancelar"</button>
                            <button class="confirm-btn" on:click=move |_| resolve(true)>"Adicionar"</button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
