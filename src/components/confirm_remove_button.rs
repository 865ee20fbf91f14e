//! Confirm Remove Button Component
//!
//! Two-step removal: × first, then an inline question with ✓ / ✗.

use leptos::prelude::*;

/// Inline removal with confirmation
///
/// # Arguments
/// * `button_class` - CSS class for the × button
/// * `question` - Text shown while asking
/// * `on_confirm` - Runs after ✓
#[component]
pub fn ConfirmRemoveButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Remover?".to_string())] question: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    move || {
        if asking.get() {
            view! {
                <span class="remove-confirm">
                    <span class="remove-confirm-text">{question.clone()}</span>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
