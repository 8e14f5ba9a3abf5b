//! Reactive handles shared by every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`AppContext`] at the root. Views read the session
//! signal for rendering and route guards; every mutation goes through a
//! [`BrowserSessionManager`] built from the current value and published back
//! with [`AppContext::publish`], so the signal and `localStorage` never drift.

use leptos::prelude::*;

use super::session::{BrowserSessionManager, Session};
use crate::config::ApiConfig;
use crate::net::api::ApiClient;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self { session: RwSignal::new(Session::new()), config: StoredValue::new(config) }
    }

    /// Fetch the context provided by `App`.
    pub fn use_app() -> Self {
        expect_context::<Self>()
    }

    /// API client carrying the current bearer token, if any.
    pub fn client(&self) -> ApiClient {
        let session = self.session.get_untracked();
        ApiClient::new(&self.config.get_value()).with_token(session.token())
    }

    /// Manager seeded with the current session for one operation.
    pub fn manager(&self) -> BrowserSessionManager {
        BrowserSessionManager::for_browser(self.session.get_untracked(), &self.config.get_value())
    }

    /// Make the manager's session the one every view sees.
    pub fn publish(&self, manager: BrowserSessionManager) {
        self.session.set(manager.into_session());
    }
}
