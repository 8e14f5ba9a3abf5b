//! Single package with its features and a booking call to action.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::status::LoadingNotice;
use crate::net::types::Package;
use crate::state::context::AppContext;
use crate::util::booking_form::format_price;
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load package details. Please try again.";

#[component]
pub fn PackageDetailsPage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let params = use_params_map();
    let package_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let package = RwSignal::new(None::<Result<Package, String>>);

    Effect::new(move || {
        let id = package_id();
        let client = ctx.client();
        package.set(None);
        leptos::task::spawn_local(async move {
            let result = client.get_package(&id).await.map_err(|e| {
                log::warn!("package {id} load failed: {e}");
                MSG_LOAD_FAILED.to_owned()
            });
            package.set(Some(result));
        });
    });

    // Signed-out visitors go through login; the booking guard would do the same.
    let book_href = move || {
        if ctx.session.with(|s| s.is_authenticated()) {
            paths::booking(&package_id())
        } else {
            paths::LOGIN.to_owned()
        }
    };

    move || match package.get() {
        None => view! { <LoadingNotice text="Loading package details..."/> }.into_any(),
        Some(Err(message)) => view! {
            <div class="page-error">
                <div class="banner banner--error">{message}</div>
                <A href=paths::HOME attr:class="btn btn--primary">"Back to Home"</A>
            </div>
        }
        .into_any(),
        Some(Ok(pkg)) => {
            view! {
                <div class="package-details">
                    <nav class="breadcrumb">
                        <A href=paths::HOME>"Home"</A>
                        " / "
                        <span>{pkg.title.clone()}</span>
                    </nav>
                    <h1>{pkg.title.clone()}</h1>
                    <span class="package-card__category">{pkg.category.label()}</span>
                    <p class="package-details__price">{format_price(pkg.price)}</p>
                    {pkg.duration.map(|hours| view! { <p>{format!("Duration: {hours} hours")}</p> })}
                    <p>{pkg.description.clone()}</p>
                    <h3>"What's included"</h3>
                    <ul class="feature-list">
                        {pkg.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                    </ul>
                    <A href=book_href attr:class="btn btn--primary">"Book Now"</A>
                </div>
            }
            .into_any()
        }
    }
}
