//! Taskdeck Frontend App
//!
//! Root component: provides the context and switches between screens.

use leptos::prelude::*;
use taskdeck_client::{auth, ClientConfig, Route};

use crate::auth::{SignInPage, SignUpPage};
use crate::context::AppContext;
use crate::dashboard::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ClientConfig::from_env());
    provide_context(ctx);

    // Entry point resolves to dashboard or sign-in
    Effect::new(move |_| {
        if ctx.route.get() == Route::Home {
            auth::enter(&ctx.session(), &ctx);
        }
    });

    view! {
        <div class="app-layout">
            {move || match ctx.route.get() {
                Route::Home => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Route::SignIn { registered } => view! { <SignInPage registered=registered /> }.into_any(),
                Route::SignUp => view! { <SignUpPage /> }.into_any(),
                Route::Dashboard => view! { <DashboardPage /> }.into_any(),
            }}
        </div>
    }
}
