//! Shared fixtures for unit tests: a scripted transport and task builders.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::oneshot;

use crate::domain::Task;
use crate::error::{ClientError, ClientResult};
use crate::gateway::{HttpRequest, HttpResponse, Transport};
use crate::navigation::{Navigator, Route};

enum Reply {
    Ready(ClientResult<HttpResponse>),
    Deferred(oneshot::Receiver<HttpResponse>),
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    requests: Vec<HttpRequest>,
}

/// Transport answering from a queue, in request order. Clones share state.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .replies
            .push_back(Reply::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) {
        self.reply(status, &body.to_string());
    }

    pub fn fail(&self, message: &str) {
        self.script
            .borrow_mut()
            .replies
            .push_back(Reply::Ready(Err(ClientError::Transport(message.to_string()))));
    }

    /// Queue a reply that is only delivered when the returned sender fires
    pub fn defer(&self) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().replies.push_back(Reply::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.script.borrow().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.script.borrow().requests.len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> ClientResult<HttpResponse> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script.requests.push(request);
            script.replies.pop_front()
        };
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Deferred(rx)) => rx
                .await
                .map_err(|_| ClientError::Transport("deferred reply dropped".to_string())),
            None => Err(ClientError::Transport("no scripted reply".to_string())),
        }
    }
}

/// Navigator that remembers every route it was sent to
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Rc<RefCell<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.borrow().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

pub fn task_json(id: i64, title: &str, status: bool) -> serde_json::Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "title": title,
        "description": null,
        "status": status,
        "created_at": "2024-05-01T09:00:00",
        "updated_at": "2024-05-01T09:00:00"
    })
}

pub fn task(id: i64, title: &str, status: bool) -> Task {
    serde_json::from_value(task_json(id, title, status)).expect("fixture task")
}

pub fn unauthorized_body() -> &'static str {
    r#"{"error":{"code":"UNAUTHORIZED","message":"Invalid or expired token"}}"#
}
