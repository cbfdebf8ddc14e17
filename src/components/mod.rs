//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod empty_state;
mod error_banner;
mod header;
mod task_form;
mod task_item;
mod task_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use empty_state::EmptyState;
pub use error_banner::ErrorBanner;
pub use header::Header;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
