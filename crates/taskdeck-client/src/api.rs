//! Task Service Calls
//!
//! Typed wrappers over the gateway, one per service endpoint.

use crate::domain::{Credentials, SignInResponse, Task, TaskDraft, TaskId, TaskUpdate, User};
use crate::error::ClientResult;
use crate::gateway::{ApiGateway, Transport};

pub mod paths {
    use crate::domain::TaskId;

    pub const SIGNUP: &str = "/api/auth/signup";
    pub const SIGNIN: &str = "/api/auth/signin";
    pub const TASKS: &str = "/api/tasks";

    pub fn task(id: TaskId) -> String {
        format!("{}/{}", TASKS, id)
    }

    pub fn complete(id: TaskId) -> String {
        format!("{}/{}/complete", TASKS, id)
    }
}

pub struct TaskApi<T: Transport> {
    gateway: ApiGateway<T>,
}

impl<T: Transport> TaskApi<T> {
    pub fn new(gateway: ApiGateway<T>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &ApiGateway<T> {
        &self.gateway
    }

    // ========================
    // Auth
    // ========================

    pub async fn sign_up(&self, credentials: &Credentials) -> ClientResult<User> {
        self.gateway.post(paths::SIGNUP, credentials, None).await
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> ClientResult<SignInResponse> {
        self.gateway.post(paths::SIGNIN, credentials, None).await
    }

    // ========================
    // Tasks
    // ========================

    pub async fn list_tasks(&self, token: &str) -> ClientResult<Vec<Task>> {
        self.gateway.get(paths::TASKS, Some(token)).await
    }

    pub async fn create_task(&self, token: &str, draft: &TaskDraft) -> ClientResult<Task> {
        self.gateway.post(paths::TASKS, draft, Some(token)).await
    }

    pub async fn update_task(&self, token: &str, id: TaskId, update: &TaskUpdate) -> ClientResult<Task> {
        self.gateway.put(&paths::task(id), update, Some(token)).await
    }

    /// Flips completion server-side and returns the new representation
    pub async fn toggle_task(&self, token: &str, id: TaskId) -> ClientResult<Task> {
        self.gateway.patch(&paths::complete(id), Some(token)).await
    }

    pub async fn delete_task(&self, token: &str, id: TaskId) -> ClientResult<()> {
        self.gateway.delete(&paths::task(id), Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::gateway::Method;
    use crate::test_support::{task_json, ScriptedTransport};
    use serde_json::json;

    fn api(transport: &ScriptedTransport) -> TaskApi<ScriptedTransport> {
        TaskApi::new(ApiGateway::new(ClientConfig::new("http://api.test"), transport.clone()))
    }

    #[test]
    fn test_paths() {
        assert_eq!(paths::task(12), "/api/tasks/12");
        assert_eq!(paths::complete(12), "/api/tasks/12/complete");
    }

    #[tokio::test]
    async fn test_toggle_uses_patch_on_complete_endpoint() {
        let transport = ScriptedTransport::new();
        transport.reply_json(200, task_json(4, "t", true));

        let task = api(&transport).toggle_task("tok", 4).await.unwrap();

        assert!(task.status);
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Patch);
        assert_eq!(sent.url, "http://api.test/api/tasks/4/complete");
    }

    #[tokio::test]
    async fn test_update_sends_title_and_description() {
        let transport = ScriptedTransport::new();
        transport.reply_json(200, task_json(4, "new", false));

        let update = TaskUpdate::new("new", Some("details".into()));
        api(&transport).update_task("tok", 4, &update).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "http://api.test/api/tasks/4");
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"title": "new", "description": "details"}));
    }

    #[tokio::test]
    async fn test_sign_up_sends_no_token() {
        let transport = ScriptedTransport::new();
        transport.reply_json(
            201,
            json!({"id": "u-1", "email": "a@b.c", "created_at": "2024-01-01T00:00:00"}),
        );

        let user = api(&transport)
            .sign_up(&Credentials::new("a@b.c", "password1"))
            .await
            .unwrap();

        assert_eq!(user.email, "a@b.c");
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/api/auth/signup");
        assert!(sent.header("Authorization").is_none());
    }
}
