//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetches and form state and delegates
//! validation and list math to `util`. Pages behind a guard assume the
//! session is restored and signed in.

pub mod admin;
pub mod booking;
pub mod delivery_view;
pub mod home;
pub mod login;
pub mod my_bookings;
pub mod package_details;
pub mod register;
