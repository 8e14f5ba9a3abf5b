//! Account creation; a successful registration signs the user in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::status::ErrorBanner;
use crate::state::context::AppContext;
use crate::util::auth::landing_path;
use crate::util::routes::paths;
use crate::util::validation::{RegistrationForm, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
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
        let request = match form.with_untracked(validate_registration) {
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
            let outcome = manager.register(&request).await;
            ctx.publish(manager);
            match outcome {
                Ok(profile) => landing.set(Some(landing_path(profile.role))),
                Err(failure) => error.set(failure.message),
            }
            busy.set(false);
        });
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      get: fn(&RegistrationForm) -> String,
                      set: fn(&mut RegistrationForm, String)| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Book your next event with us"</p>
                <ErrorBanner message=error/>
                <form class="auth-form" on:submit=on_submit>
                    {field("full_name", "Full Name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {field("email", "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("phone", "Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {field("password", "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field(
                        "confirm_password",
                        "Confirm Password",
                        "password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href=paths::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
