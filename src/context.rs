//! Application Context
//!
//! Shared state provided via Leptos Context API: the current screen and the
//! service handle every screen talks through.

use std::rc::Rc;

use leptos::prelude::*;
use taskdeck_client::{ApiGateway, ClientConfig, Navigator, ReqwestTransport, Route, TaskApi};

use crate::storage::{BrowserSession, BrowserStorage};

pub type AppApi = Rc<TaskApi<ReqwestTransport>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
    /// Task service client (not Send; kept in local storage)
    api: StoredValue<AppApi, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let (route, set_route) = signal(Route::Home);
        let api = Rc::new(TaskApi::new(ApiGateway::new(config, ReqwestTransport::new())));
        Self {
            route,
            set_route,
            api: StoredValue::new_local(api),
        }
    }

    pub fn api(&self) -> AppApi {
        self.api.get_value()
    }

    pub fn session(&self) -> BrowserSession {
        BrowserSession::new(BrowserStorage)
    }
}

impl Navigator for AppContext {
    fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
