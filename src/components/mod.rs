//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from the shared [`AppContext`] and render
//! chrome (navigation, route guards, status banners) around the pages.
//!
//! [`AppContext`]: crate::state::context::AppContext

pub mod navbar;
pub mod protected;
pub mod status;
