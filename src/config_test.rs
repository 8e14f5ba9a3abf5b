use super::*;

#[test]
fn default_config_uses_local_backend() {
    assert_eq!(ApiConfig::default().base_url, "http://localhost:8000");
}

#[test]
fn with_base_url_trims_trailing_slashes() {
    let config = ApiConfig::with_base_url("https://api.example.com//");
    assert_eq!(config.base_url, "https://api.example.com");
}

#[test]
fn with_base_url_trims_whitespace() {
    let config = ApiConfig::with_base_url("  https://api.example.com/v1 ");
    assert_eq!(config.base_url, "https://api.example.com/v1");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(ApiConfig::with_base_url("   ").base_url, DEFAULT_API_BASE_URL);
}
