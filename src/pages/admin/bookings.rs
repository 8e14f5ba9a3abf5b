//! All bookings with a status filter and links to details and delivery.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::status::{ErrorBanner, LoadingNotice};
use crate::net::types::{Booking, BookingStatus};
use crate::pages::my_bookings::StatusFilter;
use crate::state::context::AppContext;
use crate::util::booking_form::format_price;
use crate::util::booking_list::filter_by_status;
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load bookings. Please try again.";

#[component]
pub fn ManageBookingsPage() -> impl IntoView {
    let ctx = AppContext::use_app();

    let bookings = RwSignal::new(Vec::<Booking>::new());
    let status = RwSignal::new(None::<BookingStatus>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let client = ctx.client();
    leptos::task::spawn_local(async move {
        match client.list_bookings(None).await {
            Ok(items) => bookings.set(items),
            Err(e) => {
                log::warn!("admin booking list failed: {e}");
                error.set(e.user_message(MSG_LOAD_FAILED));
            }
        }
        loading.set(false);
    });

    let visible = move || bookings.with(|list| filter_by_status(list, status.get()));

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Manage Bookings"</h1>
            </header>
            <StatusFilter status=status/>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading bookings..."/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Package"</th>
                            <th>"Event"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th>"Total"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible().into_iter().map(|b| view! { <BookingLine booking=b/> }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn BookingLine(booking: Booking) -> impl IntoView {
    let client = booking.user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default();
    let package = booking.package.as_ref().map(|p| p.title.clone()).unwrap_or_default();
    let details_href = paths::admin_booking(&booking.id);
    let delivery_href = paths::admin_delivery(&booking.id);
    let completed = booking.status == BookingStatus::Completed;
    view! {
        <tr>
            <td>{client}</td>
            <td>{package}</td>
            <td>{booking.event_type}</td>
            <td>{booking.event_date}</td>
            <td><span class=format!("status status--{}", booking.status.as_str())>{booking.status.label()}</span></td>
            <td>{format_price(booking.total_price)}</td>
            <td>
                <A href=details_href>"Details"</A>
                {completed.then(|| view! { " " <A href=delivery_href>"Upload Delivery"</A> })}
            </td>
        </tr>
    }
}
