//! The signed-in client's bookings, newest first, with a status filter.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::status::{ErrorBanner, LoadingNotice};
use crate::net::types::{Booking, BookingStatus};
use crate::state::context::AppContext;
use crate::util::booking_form::format_price;
use crate::util::booking_list::{filter_by_status, most_recent};
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load your bookings. Please try again.";

#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let ctx = AppContext::use_app();

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let status = RwSignal::new(None::<BookingStatus>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        let Some(user_id) = ctx.session.with(|s| s.user().map(|u| u.id.clone())) else {
            return;
        };
        let client = ctx.client();
        leptos::task::spawn_local(async move {
            match client.list_user_bookings(&user_id).await {
                Ok(items) => {
                    bookings.set(most_recent(&items, items.len()));
                    error.set(String::new());
                }
                Err(e) => {
                    log::warn!("bookings for user {user_id} failed to load: {e}");
                    error.set(e.user_message(MSG_LOAD_FAILED));
                }
            }
            loading.set(false);
        });
    });

    let visible = move || bookings.with(|list| filter_by_status(list, status.get()));

    view! {
        <div class="bookings-page">
            <header class="page-header">
                <h1>"My Bookings"</h1>
                <p>"Manage and track your photography sessions"</p>
            </header>
            <StatusFilter status=status/>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading your bookings..."/> }>
                {move || {
                    let items = visible();
                    if items.is_empty() {
                        return view! {
                            <div class="empty">
                                <p>"No bookings yet."</p>
                                <A href=paths::HOME attr:class="btn btn--primary">"Browse packages"</A>
                            </div>
                        }
                        .into_any();
                    }
                    items.into_iter().map(|b| view! { <BookingRow booking=b/> }).collect_view().into_any()
                }}
            </Show>
        </div>
    }
}

/// Status select shared by the client and admin booking lists.
#[component]
pub fn StatusFilter(status: RwSignal<Option<BookingStatus>>) -> impl IntoView {
    view! {
        <div class="status-filter">
            <label for="status-filter">"Status"</label>
            <select id="status-filter" on:change=move |ev| status.set(BookingStatus::parse(&event_target_value(&ev)))>
                <option value="">"All"</option>
                {BookingStatus::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn BookingRow(booking: Booking) -> impl IntoView {
    let title = booking.package.as_ref().map_or_else(|| "Package".to_owned(), |p| p.title.clone());
    let delivered = booking.status == BookingStatus::Completed;
    let delivery_href = paths::delivery(&booking.id);
    view! {
        <article class="booking-row">
            <div>
                <h3>{title}</h3>
                <p>{booking.event_type} " · " {booking.event_date} " " {booking.event_time}</p>
                <p>{booking.location}</p>
                {booking.admin_notes.map(|notes| view! { <p class="booking-row__notes">{notes}</p> })}
            </div>
            <div class="booking-row__side">
                <span class=format!("status status--{}", booking.status.as_str())>{booking.status.label()}</span>
                <span>{format_price(booking.total_price)}</span>
                {delivered.then(|| view! { <A href=delivery_href attr:class="btn">"View Delivery"</A> })}
            </div>
        </article>
    }
}
