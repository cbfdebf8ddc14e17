//! Taskdeck Client Core
//!
//! Everything the browser UI needs that is not rendering:
//! - domain: Task/User records and the local collection
//! - session: token persistence over a key-value backend
//! - gateway: the single HTTP chokepoint and its transports
//! - api: typed calls against the task service
//! - dashboard / auth: screen controllers that reconcile results into state

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod navigation;
pub mod session;

#[cfg(test)]
mod test_support;

pub use api::TaskApi;
pub use config::ClientConfig;
pub use dashboard::{Dashboard, DashboardState, Outcome, Phase};
pub use domain::{Credentials, Entity, LocalCollection, Task, TaskDraft, TaskUpdate, User};
pub use error::{ClientError, ClientResult, ErrorCode, ErrorKind};
pub use gateway::{ApiGateway, HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
pub use navigation::{Navigator, Route};
pub use session::{KeyValueStore, MemoryStore, Session};
