//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::config::ApiConfig;
use crate::pages::admin::{
    addons::ManageAddonsPage, booking_details::AdminBookingDetailsPage, bookings::ManageBookingsPage,
    dashboard::AdminDashboardPage, packages::ManagePackagesPage, upload_delivery::UploadDeliveryPage,
};
use crate::pages::{
    booking::BookingPage, delivery_view::DeliveryViewPage, home::HomePage, login::LoginPage,
    my_bookings::MyBookingsPage, package_details::PackageDetailsPage, register::RegisterPage,
};
use crate::state::context::AppContext;
use crate::util::routes::AppRoute;

/// Root application component.
///
/// Provides the shared context, restores the stored session once, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new(ApiConfig::from_build_env());
    provide_context(ctx);

    // Startup restore; the manager ignores any later call.
    let mut manager = ctx.manager();
    manager.restore();
    ctx.publish(manager);

    view! {
        <Stylesheet id="photobook" href="/photobook.css"/>
        <Title text="MC Events"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("packages"), ParamSegment("id")) view=PackageDetailsPage/>
                    // Older links used the singular form.
                    <Route path=(StaticSegment("package"), ParamSegment("id")) view=PackageDetailsPage/>
                    <Route
                        path=(StaticSegment("booking"), ParamSegment("package_id"))
                        view=|| view! { <Protected route=AppRoute::Booking><BookingPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("my-bookings")
                        view=|| view! { <Protected route=AppRoute::MyBookings><MyBookingsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("delivery"), ParamSegment("booking_id"))
                        view=|| view! { <Protected route=AppRoute::Delivery><DeliveryViewPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| {
                            view! {
                                <Protected route=AppRoute::AdminDashboard>
                                    <AdminDashboardPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("packages"))
                        view=|| {
                            view! {
                                <Protected route=AppRoute::AdminPackages>
                                    <ManagePackagesPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("addons"))
                        view=|| {
                            view! {
                                <Protected route=AppRoute::AdminAddons>
                                    <ManageAddonsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("bookings"))
                        view=|| {
                            view! {
                                <Protected route=AppRoute::AdminBookings>
                                    <ManageBookingsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("bookings"), ParamSegment("booking_id"))
                        view=|| {
                            view! {
                                <Protected route=AppRoute::AdminBookingDetails>
                                    <AdminBookingDetailsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("delivery"), ParamSegment("booking_id"))
                        view=|| {
                            view! {
                                <Protected route=AppRoute::AdminDelivery>
                                    <UploadDeliveryPage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
