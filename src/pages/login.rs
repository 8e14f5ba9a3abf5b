//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::status::ErrorBanner;
use crate::state::context::AppContext;
use crate::util::auth::landing_path;
use crate::util::routes::paths;
use crate::util::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let landing = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(path) = landing.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        leptos::task::spawn_local(async move {
            let mut manager = ctx.manager();
            let outcome = manager.login(&request).await;
            ctx.publish(manager);
            match outcome {
                Ok(profile) => landing.set(Some(landing_path(profile.role))),
                Err(failure) => error.set(failure.message),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your bookings"</p>
                <ErrorBanner message=error/>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href=paths::REGISTER>"Register"</A>
                </p>
            </div>
        </div>
    }
}
