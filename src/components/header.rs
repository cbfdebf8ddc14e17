//! Dashboard Header Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dashboard::use_dashboard;

/// Title bar with the signed-in user and a logout button
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let dashboard = use_dashboard();

    let email = ctx.session().user().map(|user| user.email);

    view! {
        <header class="app-header">
            <h1 class="app-title">"Taskdeck"</h1>
            <div class="header-actions">
                {email.map(|email| view! { <span class="user-email">{email}</span> })}
                <button
                    class="logout-btn"
                    on:click=move |_| dashboard.with_value(|d| d.logout())
                >
                    "Logout"
                </button>
            </div>
        </header>
    }
}
