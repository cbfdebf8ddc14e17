//! Error Banner Component

use leptos::prelude::*;

use crate::dashboard::use_dashboard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Shows the latest failure until dismissed
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();
    let dashboard = use_dashboard();

    move || {
        store.banner().get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span>{message}</span>
                    <button
                        class="dismiss-btn"
                        title="Dismiss"
                        on:click=move |_| dashboard.with_value(|d| d.dismiss_banner())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
