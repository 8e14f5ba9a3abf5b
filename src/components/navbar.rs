//! Top navigation with role-aware links and the logout button.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::context::AppContext;
use crate::util::routes::paths;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = AppContext::use_app();

    let signed_in = move || ctx.session.with(|s| s.is_authenticated());
    let is_admin = move || ctx.session.with(|s| s.is_admin());
    let display_name = move || ctx.session.with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default());
    let initial = move || avatar_initial(&display_name());

    let on_logout = move |_| {
        let mut manager = ctx.manager();
        manager.logout();
        ctx.publish(manager);
        #[cfg(feature = "csr")]
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(paths::HOME) {
                log::warn!("post-logout navigation failed: {e:?}");
            }
        }
    };

    view! {
        <nav class="navbar">
            <A href=paths::HOME attr:class="navbar__brand">"MC Events"</A>
            <ul class="navbar__links">
                <li><A href=paths::HOME>"Home"</A></li>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <li><A href=paths::LOGIN>"Login"</A></li>
                            <li><A href=paths::REGISTER attr:class="btn btn--primary">"Register"</A></li>
                        }
                    }
                >
                    <Show
                        when=is_admin
                        fallback=|| view! { <li><A href=paths::MY_BOOKINGS>"My Bookings"</A></li> }
                    >
                        <li><A href=paths::ADMIN>"Dashboard"</A></li>
                        <li><A href=paths::ADMIN_PACKAGES>"Packages"</A></li>
                        <li><A href=paths::ADMIN_BOOKINGS>"Bookings"</A></li>
                        <li><A href=paths::ADMIN_ADDONS>"Add-ons"</A></li>
                    </Show>
                    <li class="navbar__user">
                        <span class="navbar__avatar">{initial}</span>
                        <span>{display_name}</span>
                    </li>
                    <li>
                        <button class="btn btn--primary" on:click=on_logout>
                            "Logout"
                        </button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}

/// Uppercased first letter of the name, `U` when blank.
fn avatar_initial(name: &str) -> String {
    name.trim().chars().next().map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}
