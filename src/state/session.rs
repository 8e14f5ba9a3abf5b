//! Signed-in session state and its single writer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is what views and route guards read (via a context signal).
//! `SessionManager` is the only code that changes it: restore from durable
//! storage at startup, login/register against the API, logout. Every change
//! is mirrored into the [`CredentialStore`] before it is published.
//!
//! ERROR HANDLING
//! ==============
//! Login and register never propagate errors; they return [`AuthOutcome`] with
//! a display-ready message and leave the session untouched on failure.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::credentials::{BrowserStorage, CredentialRecord, CredentialStore};
use crate::config::ApiConfig;
use crate::net::api::{ApiClient, AuthGateway};
use crate::net::error::ApiError;
use crate::net::types::{AuthGrant, LoginRequest, Profile, RegisterRequest, Role};

pub const LOGIN_FALLBACK: &str = "Login failed";
pub const REGISTER_FALLBACK: &str = "Registration failed";

/// Current authentication state.
///
/// Token and profile live in one optional record, so one is never present
/// without the other. `loading` is true until the startup restore finishes;
/// readers must treat it as "unknown", not "signed out".
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    credentials: Option<CredentialRecord>,
    loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// State before the startup restore has run.
    pub fn new() -> Self {
        Self { credentials: None, loading: true }
    }

    /// A session whose restore has completed with `credentials`.
    pub fn restored(credentials: Option<CredentialRecord>) -> Self {
        Self { credentials, loading: false }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    pub fn user(&self) -> Option<&Profile> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_client(&self) -> bool {
        self.role() == Some(Role::Client)
    }
}

/// Display-ready reason a login or registration did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

/// Result of [`SessionManager::login`] / [`SessionManager::register`].
pub type AuthOutcome = Result<Profile, AuthFailure>;

/// Owns the session and keeps the credential store in step with it.
#[derive(Clone, Debug)]
pub struct SessionManager<S, G> {
    session: Session,
    store: S,
    gateway: G,
}

/// Manager wired to `localStorage` and the HTTP API.
pub type BrowserSessionManager = SessionManager<BrowserStorage, ApiClient>;

impl BrowserSessionManager {
    /// Take over `session` for one operation against the configured API.
    pub fn for_browser(session: Session, config: &ApiConfig) -> Self {
        Self::resume(session, BrowserStorage, ApiClient::new(config))
    }
}

impl<S: CredentialStore, G: AuthGateway> SessionManager<S, G> {
    /// Fresh manager whose session is still loading.
    pub fn new(store: S, gateway: G) -> Self {
        Self::resume(Session::new(), store, gateway)
    }

    /// Continue from an existing session (e.g. the one held by the UI signal).
    pub fn resume(session: Session, store: S, gateway: G) -> Self {
        Self { session, store, gateway }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    /// Populate the session from durable storage and finish loading.
    ///
    /// One-shot: once loading is done, storage is never consulted again.
    pub fn restore(&mut self) {
        if !self.session.loading {
            log::debug!("session restore skipped: already restored");
            return;
        }
        let credentials = CredentialRecord::load(&self.store);
        match &credentials {
            Some(record) => log::info!("session restored for user {}", record.user.id),
            None => log::debug!("no stored session"),
        }
        self.session = Session::restored(credentials);
    }

    pub async fn login(&mut self, credentials: &LoginRequest) -> AuthOutcome {
        let result = self.gateway.login(credentials).await;
        self.establish("login", result, LOGIN_FALLBACK)
    }

    /// Create an account and sign in as it. Returns the new profile.
    pub async fn register(&mut self, request: &RegisterRequest) -> AuthOutcome {
        let result = self.gateway.register(request).await;
        self.establish("register", result, REGISTER_FALLBACK)
    }

    /// Drop the session and its stored record. Local only; cannot fail.
    pub fn logout(&mut self) {
        CredentialRecord::clear(&self.store);
        self.session.credentials = None;
        log::info!("signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn is_client(&self) -> bool {
        self.session.is_client()
    }

    fn establish(&mut self, action: &str, result: Result<AuthGrant, ApiError>, fallback: &str) -> AuthOutcome {
        match result {
            Ok(grant) => {
                let record = CredentialRecord { token: grant.access_token, user: grant.user };
                record.save(&self.store);
                log::info!("{action} succeeded for user {} as {}", record.user.id, record.user.role.as_str());
                let profile = record.user.clone();
                self.session.credentials = Some(record);
                Ok(profile)
            }
            Err(err) => {
                log::warn!("{action} failed: {err}");
                Err(AuthFailure { message: err.user_message(fallback) })
            }
        }
    }
}
