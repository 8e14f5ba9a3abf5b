//! Networking modules for the booking REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `types` defines the wire schema, and `error`
//! models failure payloads and their display messages.

pub mod api;
pub mod error;
pub mod types;
