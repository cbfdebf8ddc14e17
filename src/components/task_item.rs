//! Task Item Component
//!
//! One row of the list: completion checkbox, inline editor and delete.
//! Every action goes through the controller; the row itself never changes
//! the task, it re-renders from the store once the service confirms.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskdeck_client::domain::{TaskId, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};
use taskdeck_client::{Outcome, Task, TaskUpdate};

use crate::components::DeleteConfirmButton;
use crate::dashboard::use_dashboard;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

/// Date shown under the task, e.g. "May 1, 2024"
pub fn display_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// The row's task as currently held in the store
pub fn row_task(store: AppStore, id: TaskId) -> Memo<Option<Task>> {
    Memo::new(move |_| {
        store
            .tasks()
            .with(|tasks| tasks.iter().find(|t| t.id == id).cloned())
    })
}

#[component]
pub fn TaskItem(id: TaskId) -> impl IntoView {
    let store = use_app_store();
    let dashboard = use_dashboard();

    let task = row_task(store, id);
    let complete = move || task.with(|t| t.as_ref().is_some_and(Task::is_complete));
    let title = move || task.with(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description = move || task.with(|t| t.as_ref().and_then(|t| t.description.clone()));
    let created = move || {
        task.with(|t| t.as_ref().map(|t| display_date(&t.created_at)).unwrap_or_default())
    };

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_description, set_edit_description) = signal(String::new());
    let (hint, set_hint) = signal(None::<String>);

    let on_toggle = move |_| {
        let dashboard = dashboard.get_value();
        spawn_local(async move {
            dashboard.toggle(id).await;
        });
    };

    // Editor starts from the task as currently confirmed
    let on_edit = move |_| {
        set_edit_title.set(title());
        set_edit_description.set(description().unwrap_or_default());
        set_hint.set(None);
        set_editing.set(true);
    };

    let on_save = move |_| {
        let description = edit_description.get();
        let update = TaskUpdate::new(
            edit_title.get(),
            if description.is_empty() { None } else { Some(description) },
        );
        if let Err(e) = update.validate() {
            set_hint.set(Some(e.to_string()));
            return;
        }
        set_hint.set(None);

        let dashboard = dashboard.get_value();
        spawn_local(async move {
            // Failure keeps the editor open with the user's text
            if dashboard.edit(id, update).await == Outcome::Applied {
                set_editing.set(false);
            }
        });
    };

    let on_cancel = move |_| {
        set_hint.set(None);
        set_editing.set(false);
    };

    let on_delete = Callback::new(move |_: ()| {
        let dashboard = dashboard.get_value();
        spawn_local(async move {
            dashboard.delete(id, || true).await;
        });
    });

    view! {
        <li class=move || if complete() { "task-item completed" } else { "task-item" }>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="task-view">
                        <input type="checkbox" prop:checked=complete on:change=on_toggle />
                        <div class="task-content">
                            <h3 class="task-title">{title}</h3>
                            {move || description().map(|text| view! { <p class="task-description">{text}</p> })}
                            <span class="task-date">"Created " {created}</span>
                        </div>
                        <div class="task-actions">
                            <button class="edit-btn" on:click=on_edit>"Edit"</button>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                        </div>
                    </div>
                }
            >
                <div class="task-edit">
                    <input
                        type="text"
                        maxlength=MAX_TITLE_CHARS.to_string()
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                    />
                    <textarea
                        rows="3"
                        maxlength=MAX_DESCRIPTION_CHARS.to_string()
                        prop:value=move || edit_description.get()
                        on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                    />
                    {move || hint.get().map(|text| view! { <p class="form-hint">{text}</p> })}
                    <div class="task-actions">
                        <button class="save-btn" on:click=on_save>"Save"</button>
                        <button class="cancel-btn" on:click=on_cancel>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </li>
    }
}
