//! Public package catalogue with a category filter.
//!
//! A restored admin session is sent on to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::status::{ErrorBanner, LoadingNotice};
use crate::net::api::CatalogScope;
use crate::net::types::{Package, PackageCategory};
use crate::state::context::AppContext;
use crate::util::auth::home_redirect;
use crate::util::booking_form::format_price;
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load packages. Please try again.";

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let navigate = use_navigate();

    let category = RwSignal::new(None::<PackageCategory>);
    let packages = RwSignal::new(Vec::<Package>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(path) = ctx.session.with(home_redirect) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    Effect::new(move || {
        let filter = category.get();
        let client = ctx.client();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match client.list_packages(filter, CatalogScope::Active).await {
                Ok(items) => {
                    packages.set(items);
                    error.set(String::new());
                }
                Err(e) => {
                    log::warn!("package catalogue load failed: {e}");
                    error.set(MSG_LOAD_FAILED.to_owned());
                }
            }
            loading.set(false);
        });
    });

    let on_category = move |ev: leptos::ev::Event| {
        category.set(PackageCategory::parse(&event_target_value(&ev)));
    };

    view! {
        <div class="home-page">
            <header class="hero">
                <h1>"Capture Your Moments"</h1>
                <p>"Professional photography and videography for every event."</p>
            </header>
            <div class="home-page__filter">
                <label for="category-filter">"Category"</label>
                <select id="category-filter" on:change=on_category>
                    <option value="">"All packages"</option>
                    {PackageCategory::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading packages..."/> }>
                <div class="package-grid">
                    {move || {
                        let items = packages.get();
                        if items.is_empty() {
                            return view! { <p class="empty">"No packages available."</p> }.into_any();
                        }
                        items.into_iter().map(|pkg| view! { <PackageCard package=pkg/> }).collect_view().into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn PackageCard(package: Package) -> impl IntoView {
    let href = paths::package(&package.id);
    view! {
        <article class="package-card">
            <span class="package-card__category">{package.category.label()}</span>
            <h3>{package.title}</h3>
            <p>{package.description}</p>
            <p class="package-card__price">{format_price(package.price)}</p>
            <A href=href attr:class="btn btn--primary">"View details"</A>
        </article>
    }
}
