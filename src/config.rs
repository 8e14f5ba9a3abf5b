//! Build-time client configuration.
//!
//! The API base URL is baked in at compile time so the static WASM bundle
//! needs no runtime config fetch before the first request.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Location of the booking REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the `PHOTOBOOK_API_URL` compile-time variable.
    ///
    /// Falls back to [`DEFAULT_API_BASE_URL`] when unset or blank.
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("PHOTOBOOK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(raw: &str) -> Self {
        Self { base_url: normalize_base_url(raw) }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_owned();
    }
    trimmed.trim_end_matches('/').to_owned()
}
