//! Booking form for one package, with add-on selection and a running total.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::status::{ErrorBanner, LoadingNotice};
use crate::net::api::CatalogScope;
use crate::net::types::{AddOn, Package};
use crate::state::context::AppContext;
use crate::util::booking_form::{BookingForm, booking_total, format_price};
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load booking information. Please try again.";
const MSG_CREATE_FAILED: &str = "Failed to create booking. Please try again.";

#[component]
pub fn BookingPage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let navigate = use_navigate();
    let params = use_params_map();
    let package_id = move || params.with(|p| p.get("package_id").unwrap_or_default());

    let package = RwSignal::new(None::<Package>);
    let addons = RwSignal::new(Vec::<AddOn>::new());
    let form = RwSignal::new(BookingForm::default());
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let created = RwSignal::new(false);

    Effect::new(move || {
        if created.get() {
            navigate(paths::MY_BOOKINGS, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let id = package_id();
        let client = ctx.client();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let loaded = match client.get_package(&id).await {
                Ok(pkg) => client.list_addons(None, CatalogScope::Active).await.map(|list| (pkg, list)),
                Err(e) => Err(e),
            };
            match loaded {
                Ok((pkg, list)) => {
                    package.set(Some(pkg));
                    addons.set(list.into_iter().filter(|a| a.is_active).collect());
                    error.set(String::new());
                }
                Err(e) => {
                    log::warn!("booking form load for package {id} failed: {e}");
                    error.set(MSG_LOAD_FAILED.to_owned());
                }
            }
            loading.set(false);
        });
    });

    let total = move || {
        let price = package.with(|p| p.as_ref().map_or(0.0, |p| p.price));
        addons.with(|list| form.with(|f| booking_total(price, list, &f.selected_addons)))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match form.with_untracked(|f| f.to_request(&package_id())) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        submitting.set(true);
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.create_booking(&request).await {
                Ok(booking) => {
                    log::info!("booking {} created", booking.id);
                    created.set(true);
                }
                Err(e) => {
                    log::warn!("booking create failed: {e}");
                    error.set(e.user_message(MSG_CREATE_FAILED));
                }
            }
            submitting.set(false);
        });
    };

    let text_input = move |id: &'static str, label: &'static str, kind: &'static str,
                           get: fn(&BookingForm) -> String, set: fn(&mut BookingForm, String)| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                required
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="booking-page">
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading booking form..."/> }>
                <ErrorBanner message=error/>
                <Show when=move || package.with(Option::is_some)>
                    <h1>{move || package.with(|p| p.as_ref().map(|p| format!("Book {}", p.title)))}</h1>
                    <form class="booking-form" on:submit=on_submit>
                        {text_input("event_type", "Event Type", "text", |f| f.event_type.clone(), |f, v| f.event_type = v)}
                        {text_input("event_date", "Event Date", "date", |f| f.event_date.clone(), |f, v| f.event_date = v)}
                        {text_input("event_time", "Event Time", "time", |f| f.event_time.clone(), |f, v| f.event_time = v)}
                        {text_input("location", "Location", "text", |f| f.location.clone(), |f, v| f.location = v)}
                        <label for="notes">"Notes"</label>
                        <textarea
                            id="notes"
                            prop:value=move || form.with(|f| f.notes.clone())
                            on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                        ></textarea>
                        <fieldset class="addon-picker">
                            <legend>"Add-ons"</legend>
                            {move || {
                                addons
                                    .get()
                                    .into_iter()
                                    .map(|addon| {
                                        let id = addon.id.clone();
                                        let checked_id = addon.id.clone();
                                        view! {
                                            <label class="addon-option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || form.with(|f| f.is_selected(&checked_id))
                                                    on:change=move |_| form.update(|f| f.toggle_addon(&id))
                                                />
                                                {addon.name}
                                                " (+"
                                                {format_price(addon.price)}
                                                ")"
                                            </label>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </fieldset>
                        <p class="booking-form__total">"Total: " {move || format_price(total())}</p>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Booking" }}
                        </button>
                    </form>
                </Show>
            </Show>
        </div>
    }
}
