//! One booking in full, with the status and admin-notes editor.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::status::{ErrorBanner, LoadingNotice, SuccessBanner};
use crate::net::types::{Booking, BookingStatus, BookingStatusUpdate};
use crate::state::context::AppContext;
use crate::util::booking_form::format_price;
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load booking.";
const MSG_UPDATE_FAILED: &str = "Failed to update booking.";

#[component]
pub fn AdminBookingDetailsPage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let params = use_params_map();
    let booking_id = move || params.with(|p| p.get("booking_id").unwrap_or_default());

    let booking = RwSignal::new(None::<Booking>);
    let status = RwSignal::new(BookingStatus::Pending);
    let admin_notes = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let apply = move |found: Booking| {
        status.set(found.status);
        admin_notes.set(found.admin_notes.clone().unwrap_or_default());
        booking.set(Some(found));
    };

    Effect::new(move || {
        let id = booking_id();
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.get_booking(&id).await {
                Ok(found) => {
                    apply(found);
                    error.set(String::new());
                }
                Err(e) => {
                    log::warn!("booking {id} failed to load: {e}");
                    error.set(e.user_message(MSG_LOAD_FAILED));
                }
            }
            loading.set(false);
        });
    });

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let id = booking_id();
        let notes = admin_notes.get_untracked().trim().to_owned();
        let update = BookingStatusUpdate {
            status: Some(status.get_untracked()),
            admin_notes: (!notes.is_empty()).then_some(notes),
        };
        saving.set(true);
        success.set(String::new());
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            // Re-read so nested user/package data stays complete.
            let result = match client.update_booking_status(&id, &update).await {
                Ok(_) => client.get_booking(&id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(found) => {
                    log::info!("booking {id} set to {}", found.status.as_str());
                    apply(found);
                    error.set(String::new());
                    success.set("Booking updated.".to_owned());
                }
                Err(e) => {
                    log::warn!("booking {id} update failed: {e}");
                    error.set(e.user_message(MSG_UPDATE_FAILED));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="admin-page">
            <nav class="breadcrumb">
                <A href=paths::ADMIN_BOOKINGS>"Bookings"</A>
                " / "
                <span>"Details"</span>
            </nav>
            <SuccessBanner message=success/>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading booking..."/> }>
                {move || booking.get().map(|b| view! { <BookingSummary booking=b/> })}
                <form class="admin-form" on:submit=on_update>
                    <h2>"Update Status"</h2>
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        prop:value=move || status.get().as_str()
                        on:change=move |ev| {
                            if let Some(next) = BookingStatus::parse(&event_target_value(&ev)) {
                                status.set(next);
                            }
                        }
                    >
                        {BookingStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <label for="admin_notes">"Admin Notes"</label>
                    <textarea
                        id="admin_notes"
                        prop:value=move || admin_notes.get()
                        on:input=move |ev| admin_notes.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Updating..." } else { "Update Booking" }}
                    </button>
                </form>
                <Show when=move || status.get() == BookingStatus::Completed>
                    <A href=move || paths::admin_delivery(&booking_id()) attr:class="btn">"Upload Delivery"</A>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn BookingSummary(booking: Booking) -> impl IntoView {
    let client = booking.user.clone();
    let package = booking.package.clone();
    view! {
        <section class="booking-summary">
            <h1>{format!("Booking {}", booking.id)}</h1>
            <span class=format!("status status--{}", booking.status.as_str())>{booking.status.label()}</span>
            <dl>
                <dt>"Event"</dt>
                <dd>{booking.event_type}</dd>
                <dt>"When"</dt>
                <dd>{booking.event_date} " " {booking.event_time}</dd>
                <dt>"Location"</dt>
                <dd>{booking.location}</dd>
                <dt>"Total"</dt>
                <dd>{format_price(booking.total_price)}</dd>
                <dt>"Client notes"</dt>
                <dd>{booking.notes.unwrap_or_default()}</dd>
            </dl>
            {client.map(|u| {
                view! {
                    <div class="booking-summary__client">
                        <h3>"Client"</h3>
                        <p>{u.full_name}</p>
                        <p>{u.email}</p>
                        <p>{u.phone.unwrap_or_default()}</p>
                    </div>
                }
            })}
            {package.map(|p| {
                view! {
                    <div class="booking-summary__package">
                        <h3>"Package"</h3>
                        <p>{p.title}</p>
                        <p>"Category: " {p.category.label()}</p>
                        <p>{format_price(p.price)}</p>
                    </div>
                }
            })}
            <h3>"Add-ons"</h3>
            <ul>
                {booking
                    .addons
                    .into_iter()
                    .map(|item| {
                        let name = item.addon.name;
                        view! { <li>{name} " × " {item.quantity}</li> }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
