//! Loading / error / success banners shared by pages.

use leptos::prelude::*;

/// Error banner, hidden while `message` is empty.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="banner banner--error" role="alert">{move || message.get()}</div>
        </Show>
    }
}

/// Success banner, hidden while `message` is empty.
#[component]
pub fn SuccessBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="banner banner--success">{move || message.get()}</div>
        </Show>
    }
}

#[component]
pub fn LoadingNotice(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class="page-status">{text}</p> }
}
