//! Task List Component

use leptos::prelude::*;

use crate::components::{EmptyState, TaskItem};
use crate::store::{use_app_store, AppStateStoreFields};

/// Renders tasks in store order, or the empty state
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.tasks().with(|tasks| tasks.is_empty())
            fallback=|| view! { <EmptyState /> }
        >
            <ul class="task-list">
                // Rows read their fields from the store, so a confirmed update
                // re-renders in place and an open editor survives it
                <For
                    each=move || store.tasks().with(|tasks| tasks.iter().map(|t| t.id).collect::<Vec<_>>())
                    key=|id| *id
                    children=|id| view! { <TaskItem id=id /> }
                />
            </ul>
        </Show>
    }
}
