//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_client::domain::{MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};
use taskdeck_client::{Outcome, TaskDraft};

use crate::dashboard::use_dashboard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating a task; cleared only once the service accepts it
#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_app_store();
    let dashboard = use_dashboard();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (hint, set_hint) = signal(None::<String>);

    let submitting = move || store.submitting().get();
    let blank = move || title.with(|t| t.trim().is_empty());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting() {
            return;
        }
        let draft = TaskDraft::new(title.get(), description.get());
        if let Err(e) = draft.validate() {
            set_hint.set(Some(e.to_string()));
            return;
        }
        set_hint.set(None);

        let dashboard = dashboard.get_value();
        spawn_local(async move {
            if dashboard.create(draft).await == Outcome::Applied {
                set_title.set(String::new());
                set_description.set(String::new());
            }
        });
    };

    view! {
        <form class="task-form" on:submit=create_task>
            <h2>"Create New Task"</h2>
            <input
                type="text"
                placeholder="Task title"
                maxlength=MAX_TITLE_CHARS.to_string()
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                rows="3"
                maxlength=MAX_DESCRIPTION_CHARS.to_string()
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            {move || hint.get().map(|text| view! { <p class="form-hint">{text}</p> })}
            <button type="submit" disabled=move || submitting() || blank()>
                {move || if submitting() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
