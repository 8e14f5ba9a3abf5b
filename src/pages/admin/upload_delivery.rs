//! Create or update the delivery for a completed booking.
//!
//! The booking comes from the route; the select lets the admin switch to any
//! other completed booking. Picking a booking pre-fills the form from its
//! existing delivery, if there is one.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status::{ErrorBanner, LoadingNotice, SuccessBanner};
use crate::net::api::{DeliveryGateway, DeliveryWrite};
use crate::net::types::{Booking, BookingStatus};
use crate::state::context::AppContext;
use crate::util::admin_forms::DeliveryForm;

const MSG_LOAD_FAILED: &str = "Failed to load bookings. Please try again.";
const MSG_SAVE_FAILED: &str = "Failed to save delivery. Please try again.";
const MSG_PICK_BOOKING: &str = "Select a booking first.";

#[component]
pub fn UploadDeliveryPage() -> impl IntoView {
    let ctx = AppContext::use_app();
    let params = use_params_map();

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let selected = RwSignal::new(String::new());
    let form = RwSignal::new(DeliveryForm::default());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let client = ctx.client();
    leptos::task::spawn_local(async move {
        match client.list_bookings(Some(BookingStatus::Completed)).await {
            Ok(items) => bookings.set(items.into_iter().filter(|b| b.status == BookingStatus::Completed).collect()),
            Err(e) => {
                log::warn!("completed bookings failed to load: {e}");
                error.set(MSG_LOAD_FAILED.to_owned());
            }
        }
        loading.set(false);
    });

    Effect::new(move || {
        selected.set(params.with(|p| p.get("booking_id").unwrap_or_default()));
    });

    // Pre-fill from the delivery on file; a missing one means a blank form.
    // A lookup that resolves after the selection moved on is dropped.
    Effect::new(move || {
        let booking_id = selected.get();
        form.set(DeliveryForm::default());
        if booking_id.is_empty() {
            return;
        }
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.get_delivery(&booking_id).await {
                Ok(existing) => {
                    let current = selected.get_untracked();
                    match DeliveryForm::prefill_for(&current, &booking_id, &existing) {
                        Some(prefill) => form.set(prefill),
                        None => {
                            log::debug!("dropping stale delivery lookup for booking {booking_id}");
                        }
                    }
                }
                Err(e) if e.is_not_found() => {}
                Err(e) => log::warn!("delivery lookup for booking {booking_id} failed: {e}"),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let booking_id = selected.get_untracked();
        if booking_id.is_empty() {
            error.set(MSG_PICK_BOOKING.to_owned());
            return;
        }
        let input = form.with_untracked(DeliveryForm::to_input);
        error.set(String::new());
        success.set(String::new());
        saving.set(true);
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.upsert_delivery(&booking_id, input).await {
                Ok((_, write)) => {
                    log::info!("delivery for booking {booking_id} saved ({write:?})");
                    let message = match write {
                        DeliveryWrite::Created => "Delivery created successfully!",
                        DeliveryWrite::Updated => "Delivery updated successfully!",
                    };
                    success.set(message.to_owned());
                    selected.set(String::new());
                }
                Err(e) => {
                    log::warn!("delivery save for booking {booking_id} failed: {e}");
                    error.set(e.user_message(MSG_SAVE_FAILED));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Upload Delivery Files"</h1>
                <p>"Upload and manage delivery files for completed bookings"</p>
            </header>
            <SuccessBanner message=success/>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading bookings..."/> }>
                <form class="admin-form" on:submit=on_submit>
                    <label for="booking">"Booking"</label>
                    <select
                        id="booking"
                        prop:value=move || selected.get()
                        on:change=move |ev| {
                            success.set(String::new());
                            error.set(String::new());
                            selected.set(event_target_value(&ev));
                        }
                    >
                        <option value="">"Select a completed booking"</option>
                        {move || {
                            bookings
                                .get()
                                .into_iter()
                                .map(|b| {
                                    let client = b.user.map(|u| u.full_name).unwrap_or_default();
                                    let label = format!("{client} · {} · {}", b.event_type, b.event_date);
                                    view! { <option value=b.id>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                    <label for="photo_urls">"Photo URLs (one per line)"</label>
                    <textarea
                        id="photo_urls"
                        rows="6"
                        prop:value=move || form.with(|f| f.photo_urls.clone())
                        on:input=move |ev| form.update(|f| f.photo_urls = event_target_value(&ev))
                    ></textarea>
                    <label for="gallery_url">"Gallery URL"</label>
                    <input
                        id="gallery_url"
                        type="url"
                        prop:value=move || form.with(|f| f.gallery_url.clone())
                        on:input=move |ev| form.update(|f| f.gallery_url = event_target_value(&ev))
                    />
                    <label for="delivery_notes">"Notes"</label>
                    <textarea
                        id="delivery_notes"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Delivery" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
