//! Dashboard Controller
//!
//! Owns the task list shown on the dashboard and keeps it consistent with
//! the service:
//! - every change is applied only after the service confirms it, using the
//!   entity the service returned
//! - a failed call leaves the list exactly as it was
//! - an auth failure clears the session and leaves for sign-in
//!
//! Calls are not coordinated with each other. Each reads the token once
//! when it starts, and results are applied in completion order, so the
//! last response to arrive wins.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::api::TaskApi;
use crate::domain::{LocalCollection, Task, TaskDraft, TaskId, TaskUpdate};
use crate::error::ClientError;
use crate::gateway::Transport;
use crate::navigation::{Navigator, Route};
use crate::session::{KeyValueStore, Session};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tasks";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create task";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update task";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete task";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the initial list
    #[default]
    Loading,
    /// List displayed (possibly with a banner on top)
    Ready,
    /// Session gone; navigation to sign-in has been requested
    Redirecting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub phase: Phase,
    pub tasks: LocalCollection<Task>,
    /// Error banner, shown over whatever phase is current
    pub banner: Option<String>,
    /// A create call is in flight
    pub submitting: bool,
}

/// What a controller action ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Service confirmed; local state updated
    Applied,
    /// Service or network failure; banner shown, list untouched
    Failed,
    /// No usable session; navigating to sign-in
    Redirected,
    /// User declined the confirmation; nothing was sent
    Declined,
}

type Observer = Rc<dyn Fn(&DashboardState)>;

struct Inner<T: Transport, S: KeyValueStore, N: Navigator> {
    api: Rc<TaskApi<T>>,
    session: Session<S>,
    navigator: N,
    state: RefCell<DashboardState>,
    observer: RefCell<Option<Observer>>,
}

/// Cheap to clone; clones drive the same state.
pub struct Dashboard<T: Transport, S: KeyValueStore, N: Navigator> {
    inner: Rc<Inner<T, S, N>>,
}

impl<T: Transport, S: KeyValueStore, N: Navigator> Clone for Dashboard<T, S, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport, S: KeyValueStore, N: Navigator> Dashboard<T, S, N> {
    pub fn new(api: Rc<TaskApi<T>>, session: Session<S>, navigator: N) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                session,
                navigator,
                state: RefCell::new(DashboardState::default()),
                observer: RefCell::new(None),
            }),
        }
    }

    /// Called with a snapshot after every state change
    pub fn subscribe(&self, observer: impl Fn(&DashboardState) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Detach the observer; later changes are no longer published
    pub fn unsubscribe(&self) {
        *self.inner.observer.borrow_mut() = None;
    }

    pub fn state(&self) -> DashboardState {
        self.inner.state.borrow().clone()
    }

    pub fn session(&self) -> &Session<S> {
        &self.inner.session
    }

    // ========================
    // Actions
    // ========================

    /// Initial load. Without a token nothing is fetched.
    pub async fn mount(&self) -> Outcome {
        let Some(token) = self.inner.session.token() else {
            return self.redirect();
        };
        self.update(|s| s.phase = Phase::Loading);

        match self.inner.api.list_tasks(&token).await {
            Ok(tasks) => {
                debug!("loaded {} tasks", tasks.len());
                self.update(|s| {
                    s.tasks = LocalCollection::from_server(tasks);
                    s.phase = Phase::Ready;
                });
                Outcome::Applied
            }
            Err(e) if e.is_auth_failure() => self.end_session(&e),
            Err(e) => {
                info!("task list failed: {}", e);
                self.update(|s| {
                    s.banner = Some(LOAD_FAILED_MESSAGE.to_string());
                    s.phase = Phase::Ready;
                });
                Outcome::Failed
            }
        }
    }

    pub async fn create(&self, draft: TaskDraft) -> Outcome {
        let Some(token) = self.inner.session.token() else {
            return self.redirect();
        };
        self.update(|s| s.submitting = true);
        let result = self.inner.api.create_task(&token, &draft).await;
        self.update(|s| s.submitting = false);

        match result {
            Ok(task) => {
                debug!("created task {}", task.id);
                self.update(|s| s.tasks.prepend(task));
                Outcome::Applied
            }
            Err(e) => self.fail(e, CREATE_FAILED_MESSAGE),
        }
    }

    /// The service's returned entity is the new status, not a local flip
    pub async fn toggle(&self, id: TaskId) -> Outcome {
        let Some(token) = self.inner.session.token() else {
            return self.redirect();
        };
        match self.inner.api.toggle_task(&token, id).await {
            Ok(task) => self.replace(task),
            Err(e) => self.fail(e, UPDATE_FAILED_MESSAGE),
        }
    }

    pub async fn edit(&self, id: TaskId, update: TaskUpdate) -> Outcome {
        let Some(token) = self.inner.session.token() else {
            return self.redirect();
        };
        match self.inner.api.update_task(&token, id, &update).await {
            Ok(task) => self.replace(task),
            Err(e) => self.fail(e, UPDATE_FAILED_MESSAGE),
        }
    }

    /// Deletes after `confirm` agrees. Declining sends nothing.
    pub async fn delete(&self, id: TaskId, confirm: impl FnOnce() -> bool) -> Outcome {
        let Some(token) = self.inner.session.token() else {
            return self.redirect();
        };
        if !confirm() {
            return Outcome::Declined;
        }
        match self.inner.api.delete_task(&token, id).await {
            Ok(()) => {
                debug!("deleted task {}", id);
                self.update(|s| {
                    s.tasks.remove(id);
                });
                Outcome::Applied
            }
            Err(e) => self.fail(e, DELETE_FAILED_MESSAGE),
        }
    }

    pub fn dismiss_banner(&self) {
        self.update(|s| s.banner = None);
    }

    pub fn logout(&self) {
        info!("logging out");
        self.inner.session.clear();
        self.redirect();
    }

    // ========================
    // Internals
    // ========================

    fn replace(&self, task: Task) -> Outcome {
        let id = task.id;
        self.update(|s| {
            // A task deleted while this call was in flight stays deleted
            if !s.tasks.replace(task) {
                debug!("task {} no longer listed; response dropped", id);
            }
        });
        Outcome::Applied
    }

    fn fail(&self, error: ClientError, fallback: &str) -> Outcome {
        if error.is_auth_failure() {
            return self.end_session(&error);
        }
        let message = error.user_message(fallback);
        self.update(|s| s.banner = Some(message));
        Outcome::Failed
    }

    fn end_session(&self, error: &ClientError) -> Outcome {
        info!("session rejected by service: {}", error);
        self.inner.session.clear();
        self.redirect()
    }

    fn redirect(&self) -> Outcome {
        self.update(|s| s.phase = Phase::Redirecting);
        self.inner.navigator.navigate(Route::sign_in());
        Outcome::Redirected
    }

    fn update(&self, f: impl FnOnce(&mut DashboardState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        let observer = self.inner.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(&snapshot);
        }
    }
}
