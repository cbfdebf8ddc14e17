use leptos::prelude::*;

/// Placeholder for an empty task list
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"No tasks yet"</h3>
            <p>"Create your first task to get started!"</p>
        </div>
    }
}
