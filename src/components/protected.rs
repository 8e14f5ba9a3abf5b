//! Route guard wrapping every non-public page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The decision comes from [`authorize`]; this component only turns it into
//! a placeholder, a client-side redirect, or the wrapped page. While the
//! session is still restoring nothing is decided, so a reload on a protected
//! URL does not bounce a signed-in user to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::AppContext;
use crate::util::auth::{RouteDecision, authorize};
use crate::util::routes::AppRoute;

#[component]
pub fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let ctx = AppContext::use_app();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| ctx.session.with(|session| authorize(session, route.access())));

    Effect::new(move || {
        if let RouteDecision::Redirect(path) = decision.get() {
            log::debug!("guard redirect {} -> {path}", route.pattern());
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Pending => view! { <p class="page-status">"Loading..."</p> }.into_any(),
        RouteDecision::Redirect(_) => view! { <p class="page-status">"Redirecting..."</p> }.into_any(),
    }
}
