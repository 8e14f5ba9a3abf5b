//! Login and registration form checks run before any request is sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

pub const MSG_LOGIN_REQUIRED: &str = "Enter both email and password.";
pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields.";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number";

/// Raw registration inputs, including the confirmation field the API never sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Trim the email and require both fields.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MSG_LOGIN_REQUIRED);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Check a registration form and build the request body.
///
/// Checks run in order and the first failure wins: required fields, password
/// confirmation, password length, phone format. The phone is trimmed first, so
/// a whitespace-only number is rejected.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, &'static str> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    if full_name.is_empty() || email.is_empty() {
        return Err(MSG_REQUIRED_FIELDS);
    }
    if form.password != form.confirm_password {
        return Err(MSG_PASSWORD_MISMATCH);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MSG_PASSWORD_TOO_SHORT);
    }
    if !is_valid_phone(phone) {
        return Err(MSG_INVALID_PHONE);
    }
    Ok(RegisterRequest {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        password: form.password.clone(),
    })
}

/// Optional leading `+`, then one or more digits, whitespace, `-`, `(` or `)`.
pub fn is_valid_phone(raw: &str) -> bool {
    let body = raw.strip_prefix('+').unwrap_or(raw);
    !body.is_empty() && body.chars().all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}
