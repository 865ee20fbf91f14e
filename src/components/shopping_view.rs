//! Shopping View Component
//!
//! Shopping list with manual entry and per-entry removal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ConfirmRemoveButton;
use crate::store::{store_dispatch, store_set_shopping, store_shopping, use_app_store};

#[component]
pub fn ShoppingView() -> impl IntoView {
    let store = use_app_store();
    let (new_entry, set_new_entry) = signal(String::new());

    // Refresh on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_shopping_entries().await {
                Ok(entries) => store_set_shopping(&store, entries),
                Err(e) => web_sys::console::error_1(&format!("[list_shopping_entries] {}", e).into()),
            }
        });
    });

    let add_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_entry.get();
        if name.trim().is_empty() { return; }
        set_new_entry.set(String::new());
        store_dispatch(store, "add_shopping_entry", commands::add_shopping_entry(name));
    };

    view! {
        <section class="shopping-view">
            <h1>"Compras"</h1>

            <form class="add-entry-form" on:submit=add_entry>
                <input
                    type="text"
                    placeholder="Adicionar à lista..."
                    prop:value=move || new_entry.get()
                    on:input=move |ev| set_new_entry.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || new_entry.get().trim().is_empty()>"+"</button>
            </form>

            <Show
                when=move || !store_shopping(&store).is_empty()
                fallback=|| view! { <p class="empty-hint">"Lista de compras vazia"</p> }
            >
                <ul class="shopping-list">
                    <For
                        each=move || store_shopping(&store).into_iter().enumerate()
                        key=|(idx, entry)| (*idx, entry.name.clone())
                        children=move |(idx, entry)| {
                            view! {
                                <li class="shopping-entry">
                                    <span class="entry-name">{entry.name}</span>
                                    <ConfirmRemoveButton
                                        button_class="delete-btn"
                                        on_confirm=Callback::new(move |_: ()| {
                                            store_dispatch(store, "remove_shopping_entry", commands::remove_shopping_entry(idx));
                                        })
                                    />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
