//! Domain Layer
//!
//! Records exchanged with the task service and the local mirror of them.
//! Nothing here performs I/O.

mod collection;
mod entity;
mod task;
mod timestamp;
mod user;

pub use collection::LocalCollection;
pub use entity::Entity;
pub use task::{Task, TaskDraft, TaskId, TaskUpdate, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};
pub use user::{Credentials, SignInResponse, User, MIN_PASSWORD_CHARS};
