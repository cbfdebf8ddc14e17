//! Task Entity
//!
//! A task as the service returns it, plus the payloads used to create and
//! edit one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::timestamp;
use crate::error::{ClientError, ClientResult};

pub type TaskId = i64;

pub const MAX_TITLE_CHARS: usize = 500;
pub const MAX_DESCRIPTION_CHARS: usize = 10_000;

/// A task owned by the signed-in user (matches the service response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier
    pub id: TaskId,
    /// Owning user, opaque to the client
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Completion status
    pub status: bool,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.status
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Body for `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskDraft {
    /// An empty description is sent as absent
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            title: title.into(),
            description: if description.is_empty() { None } else { Some(description) },
        }
    }

    /// Client-side form hint; the service remains the authority.
    pub fn validate(&self) -> ClientResult<()> {
        validate_fields(&self.title, self.description.as_deref())
    }
}

/// Body for `PUT /api/tasks/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskUpdate {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }

    pub fn validate(&self) -> ClientResult<()> {
        validate_fields(&self.title, self.description.as_deref())
    }
}

fn validate_fields(title: &str, description: Option<&str>) -> ClientResult<()> {
    if title.trim().is_empty() {
        return Err(ClientError::Validation("Title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ClientError::Validation(format!(
            "Title must be at most {} characters",
            MAX_TITLE_CHARS
        )));
    }
    if description.is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_CHARS) {
        return Err(ClientError::Validation(format!(
            "Description must be at most {} characters",
            MAX_DESCRIPTION_CHARS
        )));
    }
    Ok(())
}
