//! Admin landing page: booking counters and the most recent requests.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::status::{ErrorBanner, LoadingNotice};
use crate::net::api::CatalogScope;
use crate::net::error::ApiError;
use crate::net::types::Booking;
use crate::state::context::AppContext;
use crate::util::booking_form::format_price;
use crate::util::booking_list::{DashboardStats, most_recent};
use crate::util::routes::paths;

const MSG_LOAD_FAILED: &str = "Failed to load dashboard data. Please try again.";
const RECENT_LIMIT: usize = 5;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let ctx = AppContext::use_app();

    let stats = RwSignal::new(DashboardStats::default());
    let recent = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let client = ctx.client();
    leptos::task::spawn_local(async move {
        let loaded = async {
            let bookings = client.list_bookings(None).await?;
            let packages = client.list_packages(None, CatalogScope::All).await?;
            let addons = client.list_addons(None, CatalogScope::All).await?;
            Ok::<_, ApiError>((bookings, packages.len(), addons.len()))
        };
        match loaded.await {
            Ok((bookings, package_count, addon_count)) => {
                stats.set(DashboardStats::compute(&bookings, package_count, addon_count));
                recent.set(most_recent(&bookings, RECENT_LIMIT));
            }
            Err(e) => {
                log::warn!("dashboard load failed: {e}");
                error.set(MSG_LOAD_FAILED.to_owned());
            }
        }
        loading.set(false);
    });

    let card = move |label: &'static str, value: fn(&DashboardStats) -> usize| {
        view! {
            <div class="stat-card">
                <span class="stat-card__value">{move || stats.with(value)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"Admin Dashboard"</h1>
            </header>
            <ErrorBanner message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingNotice text="Loading dashboard..."/> }>
                <div class="stat-grid">
                    {card("Total Bookings", |s| s.total_bookings)}
                    {card("Pending", |s| s.pending)}
                    {card("Approved", |s| s.approved)}
                    {card("Completed", |s| s.completed)}
                    {card("Packages", |s| s.packages)}
                    {card("Add-ons", |s| s.addons)}
                </div>
                <nav class="quick-actions">
                    <A href=paths::ADMIN_PACKAGES attr:class="btn">"Manage Packages"</A>
                    <A href=paths::ADMIN_ADDONS attr:class="btn">"Manage Add-ons"</A>
                    <A href=paths::ADMIN_BOOKINGS attr:class="btn">"Manage Bookings"</A>
                </nav>
                <h2>"Recent Bookings"</h2>
                <table class="data-table">
                    <thead>
                        <tr><th>"Client"</th><th>"Event"</th><th>"Date"</th><th>"Status"</th><th>"Total"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {move || recent.get().into_iter().map(|b| view! { <RecentRow booking=b/> }).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn RecentRow(booking: Booking) -> impl IntoView {
    let client = booking.user.map(|u| u.full_name).unwrap_or_default();
    let href = paths::admin_booking(&booking.id);
    view! {
        <tr>
            <td>{client}</td>
            <td>{booking.event_type}</td>
            <td>{booking.event_date}</td>
            <td><span class=format!("status status--{}", booking.status.as_str())>{booking.status.label()}</span></td>
            <td>{format_price(booking.total_price)}</td>
            <td><A href=href>"View"</A></td>
        </tr>
    }
}
