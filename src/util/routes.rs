//! Route surface and link builders.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use super::auth::Access;

/// Every view the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    PackageDetails,
    Booking,
    MyBookings,
    Delivery,
    AdminDashboard,
    AdminPackages,
    AdminAddons,
    AdminBookings,
    AdminBookingDetails,
    AdminDelivery,
}

impl AppRoute {
    pub const ALL: [Self; 13] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::PackageDetails,
        Self::Booking,
        Self::MyBookings,
        Self::Delivery,
        Self::AdminDashboard,
        Self::AdminPackages,
        Self::AdminAddons,
        Self::AdminBookings,
        Self::AdminBookingDetails,
        Self::AdminDelivery,
    ];

    /// Router pattern; `:name` marks a path parameter.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::PackageDetails => "/packages/:id",
            Self::Booking => "/booking/:package_id",
            Self::MyBookings => "/my-bookings",
            Self::Delivery => "/delivery/:booking_id",
            Self::AdminDashboard => "/admin",
            Self::AdminPackages => "/admin/packages",
            Self::AdminAddons => "/admin/addons",
            Self::AdminBookings => "/admin/bookings",
            Self::AdminBookingDetails => "/admin/bookings/:booking_id",
            Self::AdminDelivery => "/admin/delivery/:booking_id",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Home | Self::Login | Self::Register | Self::PackageDetails => Access::Public,
            Self::Booking | Self::MyBookings | Self::Delivery => Access::Member,
            Self::AdminDashboard
            | Self::AdminPackages
            | Self::AdminAddons
            | Self::AdminBookings
            | Self::AdminBookingDetails
            | Self::AdminDelivery => Access::Admin,
        }
    }
}

/// Concrete paths for links and redirects.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const MY_BOOKINGS: &str = "/my-bookings";
    pub const ADMIN: &str = "/admin";
    pub const ADMIN_PACKAGES: &str = "/admin/packages";
    pub const ADMIN_ADDONS: &str = "/admin/addons";
    pub const ADMIN_BOOKINGS: &str = "/admin/bookings";

    pub fn package(id: &str) -> String {
        format!("/packages/{id}")
    }

    pub fn booking(package_id: &str) -> String {
        format!("/booking/{package_id}")
    }

    pub fn delivery(booking_id: &str) -> String {
        format!("/delivery/{booking_id}")
    }

    pub fn admin_booking(booking_id: &str) -> String {
        format!("/admin/bookings/{booking_id}")
    }

    pub fn admin_delivery(booking_id: &str) -> String {
        format!("/admin/delivery/{booking_id}")
    }
}
