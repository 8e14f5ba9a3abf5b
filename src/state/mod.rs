//! Client-side state: durable credentials, the session, and the UI context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `credentials` and `session` are plain Rust and unit-tested natively;
//! `context` wraps them in Leptos signals for the views.

pub mod context;
pub mod credentials;
pub mod session;
