//! Tab Bar Component
//!
//! Bottom navigation between the fridge and shopping tabs.

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

/// (tab, icon, label)
const TABS: &[(Tab, &str, &str)] = &[
    (Tab::Fridge, "❄", "Geladeira"),
    (Tab::Shopping, "🛒", "Compras"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="tab-bar">
            {TABS.iter().map(|(tab, icon, label)| {
                let tab = *tab;
                view! {
                    <button
                        class=move || if ctx.current_tab.get() == tab { "tab-item active" } else { "tab-item" }
                        on:click=move |_| ctx.select(tab)
                    >
                        <div class="tab-icon">{*icon}</div>
                        <div class="tab-label">{*label}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
