//! Route authorization decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route asks [`authorize`] before rendering. The checks run
//! in a fixed order: loading, then authentication, then role. Checking the
//! role first would send a signed-out visitor to home instead of login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::session::Session;

use super::routes::paths;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Any signed-in user.
    Member,
    /// Signed-in admins only.
    Admin,
}

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still restoring; show a neutral placeholder, decide later.
    Pending,
    Redirect(&'static str),
    Render,
}

pub fn authorize(session: &Session, access: Access) -> RouteDecision {
    if access == Access::Public {
        return RouteDecision::Render;
    }
    if session.is_loading() {
        return RouteDecision::Pending;
    }
    if !session.is_authenticated() {
        return RouteDecision::Redirect(paths::LOGIN);
    }
    if access == Access::Admin && !session.is_admin() {
        return RouteDecision::Redirect(paths::HOME);
    }
    RouteDecision::Render
}

/// The public home page sends a restored admin session to the dashboard.
pub fn home_redirect(session: &Session) -> Option<&'static str> {
    (!session.is_loading() && session.is_admin()).then_some(paths::ADMIN)
}

/// Where to land after a successful login or registration.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN,
        Role::Client => paths::HOME,
    }
}
