//! Pure helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here except `dialog` is browser-independent so route
//! decisions, form checks, and list math are unit-tested natively.

pub mod admin_forms;
pub mod auth;
pub mod booking_form;
pub mod booking_list;
pub mod delivery_files;
pub mod dialog;
pub mod routes;
pub mod validation;
