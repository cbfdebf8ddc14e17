//! Dashboard View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! read-only mirror of the controller's state, refreshed after each change.

use leptos::prelude::*;
use reactive_stores::Store;
use taskdeck_client::dashboard::{DashboardState, Phase};
use taskdeck_client::Task;
use tracing::debug;

/// What the dashboard renders, field by field
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks in display order (newest created first)
    pub tasks: Vec<Task>,
    pub phase: Phase,
    /// Error banner text
    pub banner: Option<String>,
    /// Create request outstanding
    pub submitting: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Copy a controller snapshot into the store, touching only changed fields.
///
/// Returns how many fields were written, or `None` when the store has been
/// disposed (the page unmounted while a call was still in flight).
pub fn store_sync(store: &AppStore, state: &DashboardState) -> Option<usize> {
    let Some(tasks_changed) = store
        .tasks()
        .try_with_untracked(|tasks| tasks.as_slice() != state.tasks.as_slice())
    else {
        debug!("dashboard store gone; snapshot dropped");
        return None;
    };

    let mut written = 0;
    if tasks_changed {
        *store.tasks().try_write()? = state.tasks.as_slice().to_vec();
        written += 1;
    }
    if store.phase().try_get_untracked()? != state.phase {
        *store.phase().try_write()? = state.phase;
        written += 1;
    }
    if store.banner().try_with_untracked(|banner| *banner != state.banner)? {
        *store.banner().try_write()? = state.banner.clone();
        written += 1;
    }
    if store.submitting().try_get_untracked()? != state.submitting {
        *store.submitting().try_write()? = state.submitting;
        written += 1;
    }
    Some(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskdeck_client::LocalCollection;

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            user_id: "user-1".to_string(),
            title: title.to_string(),
            description: None,
            status: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_sync_writes_only_changed_fields() {
        let owner = Owner::new();
        owner.set();
        let store: AppStore = Store::new(AppState::default());

        let ready = DashboardState {
            phase: Phase::Ready,
            tasks: LocalCollection::from_server(vec![task(1, "a")]),
            ..Default::default()
        };
        assert_eq!(store_sync(&store, &ready), Some(2));
        assert_eq!(store.phase().get_untracked(), Phase::Ready);
        assert_eq!(store.tasks().with_untracked(|tasks| tasks.len()), 1);

        // Same snapshot again: nothing to write
        assert_eq!(store_sync(&store, &ready), Some(0));

        let failed = DashboardState {
            banner: Some("Failed to create task".to_string()),
            ..ready.clone()
        };
        assert_eq!(store_sync(&store, &failed), Some(1));
        assert_eq!(
            store.banner().get_untracked().as_deref(),
            Some("Failed to create task")
        );
    }

    #[test]
    fn test_sync_after_dispose_drops_snapshot() {
        let owner = Owner::new();
        owner.set();
        let store: AppStore = Store::new(AppState::default());
        owner.cleanup();

        let state = DashboardState {
            submitting: true,
            ..Default::default()
        };
        assert_eq!(store_sync(&store, &state), None);
    }
}
