//! Add Item Sheet Component
//!
//! Form for stocking a new item. Submit stays disabled for blank text.

use leptos::prelude::*;

use crate::commands;
use crate::store::{store_add_form_open, store_dispatch, use_app_store};

#[component]
pub fn AddItemSheet() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let can_submit = move || !new_name.get().trim().is_empty();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() { return; }
        let text = new_name.get();
        set_new_name.set(String::new());
        store_dispatch(store, "submit_add_item_form", commands::submit_add_item_form(text));
    };

    let cancel = move |_| {
        set_new_name.set(String::new());
        store_dispatch(store, "cancel_add_item_form", commands::cancel_add_item_form());
    };

    view! {
        <Show when=move || store_add_form_open(&store)>
            <div class="sheet-backdrop">
                <form class="add-item-sheet" on:submit=submit>
                    <h2>"Adicionar item"</h2>

                    <input
                        type="text"
                        placeholder="Nome do item"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />

                    <div class="sheet-actions">
                        <button type="button" class="cancel-btn" on:click=cancel>"Cancelar"</button>
                        <button type="submit" class="primary-btn" disabled=move || !can_submit()>
                            "Adicionar"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
