//! Sign-in / Sign-up Screens

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_client::auth::{self, SIGN_IN_FAILED_MESSAGE, SIGN_UP_FAILED_MESSAGE};
use taskdeck_client::domain::MIN_PASSWORD_CHARS;
use taskdeck_client::{Credentials, Navigator, Route};

use crate::context::use_app_context;

#[component]
pub fn SignInPage(registered: bool) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);

        let credentials = Credentials::new(email.get(), password.get());
        let api = ctx.api();
        spawn_local(async move {
            // Success navigates away, which unmounts this screen
            if let Err(e) = auth::sign_in(&api, &ctx.session(), &ctx, &credentials).await {
                set_error.set(Some(e.user_message(SIGN_IN_FAILED_MESSAGE)));
                set_loading.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign In"</h1>
                {registered.then(|| view! {
                    <p class="auth-notice">"Account created. Please sign in."</p>
                })}
                {move || error.get().map(|text| view! { <p class="auth-error">{text}</p> })}
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::SignUp);
                    }>"Sign up"</a>
                </p>
            </form>
        </div>
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_error.set(None);
        set_loading.set(true);

        let credentials = Credentials::new(email.get(), password.get());
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = auth::sign_up(&api, &ctx, &credentials).await {
                set_error.set(Some(e.user_message(SIGN_UP_FAILED_MESSAGE)));
                set_loading.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign Up"</h1>
                {move || error.get().map(|text| view! { <p class="auth-error">{text}</p> })}
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder=format!("Password (min {} characters)", MIN_PASSWORD_CHARS)
                    minlength=MIN_PASSWORD_CHARS.to_string()
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || loading.get() || password.with(|p| p.chars().count() < MIN_PASSWORD_CHARS)
                >
                    {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::sign_in());
                    }>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
