//! Dashboard Screen
//!
//! Wires the task controller to the view store and lays out the screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use taskdeck_client::dashboard::Phase;
use taskdeck_client::{Dashboard, ReqwestTransport};

use crate::components::{ErrorBanner, Header, TaskForm, TaskList};
use crate::context::{use_app_context, AppContext};
use crate::storage::BrowserStorage;
use crate::store::{store_sync, AppState, AppStateStoreFields, AppStore};

pub type AppDashboard = Dashboard<ReqwestTransport, BrowserStorage, AppContext>;

/// Controller handle shared with the dashboard's components
pub type DashboardHandle = StoredValue<AppDashboard, LocalStorage>;

pub fn use_dashboard() -> DashboardHandle {
    expect_context::<DashboardHandle>()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let dashboard = Dashboard::new(ctx.api(), ctx.session(), ctx);
    dashboard.subscribe(move |state| {
        store_sync(&store, state);
    });
    let handle: DashboardHandle = StoredValue::new_local(dashboard);
    provide_context(handle);

    // In-flight calls outlive the page; stop publishing into its store
    on_cleanup(move || {
        handle.try_with_value(|dashboard| dashboard.unsubscribe());
    });

    // Load on mount (redirects straight away without a token)
    Effect::new(move |_| {
        let dashboard = handle.get_value();
        spawn_local(async move {
            dashboard.mount().await;
        });
    });

    view! {
        <div class="dashboard">
            <Header />
            <main class="dashboard-main">
                {move || match store.phase().get() {
                    Phase::Loading => view! { <p class="loading">"Loading tasks..."</p> }.into_any(),
                    Phase::Redirecting => view! { <p class="loading">"Redirecting to sign in..."</p> }.into_any(),
                    Phase::Ready => view! {
                        <ErrorBanner />
                        <TaskForm />
                        <section class="task-section">
                            <h2>"Your Tasks"</h2>
                            <TaskList />
                        </section>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
