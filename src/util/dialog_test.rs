#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn confirm_is_declined_outside_browser() {
    assert!(!confirm(MSG_CONFIRM_DELETE_PACKAGE));
    assert!(!confirm(MSG_CONFIRM_DELETE_ADDON));
}
