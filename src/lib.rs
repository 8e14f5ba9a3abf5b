//! # photobook
//!
//! Leptos + WASM client for the event photography booking service.
//!
//! The crate owns the browser session (restore, login, register, logout),
//! route authorization by role, and a typed client for the booking REST API.
//! Pages and components are thin views over those pieces.
//!
//! The `csr` feature enables the browser bindings (`localStorage`, HTTP via
//! `gloo-net`, console logging). Without it the crate builds natively with
//! inert storage and an unavailable transport, which is what the unit tests
//! run against.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
