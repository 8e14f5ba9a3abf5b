//! Blocking browser confirmation before destructive admin actions.
//!
//! TRADE-OFFS
//! ==========
//! Outside a browser there is nobody to ask, so the prompt counts as
//! declined and the destructive action is skipped.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

pub const MSG_CONFIRM_DELETE_PACKAGE: &str = "Are you sure you want to delete this package?";
pub const MSG_CONFIRM_DELETE_ADDON: &str = "Are you sure you want to delete this add-on?";

/// Ask the user to confirm `message`; `true` only on an explicit OK.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
