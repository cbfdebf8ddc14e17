//! Delete Confirm Button Component
//!
//! Inline two-step delete: nothing is sent until the user confirms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a "Delete" button initially. When clicked, asks "Delete this task?"
/// with confirm/cancel buttons; only confirm runs `on_confirm`.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this task?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
