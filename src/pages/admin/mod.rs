//! Admin-only screens; every route here sits behind an admin guard.

pub mod addons;
pub mod booking_details;
pub mod bookings;
pub mod dashboard;
pub mod packages;
pub mod upload_delivery;
