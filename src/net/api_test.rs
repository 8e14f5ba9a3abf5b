use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

fn client() -> ApiClient {
    ApiClient::new(&ApiConfig::with_base_url("https://api.example.com/"))
}

// =============================================================
// URL + header construction
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(client().endpoint("/packages/"), "https://api.example.com/packages/");
}

#[test]
fn authorization_absent_without_token() {
    assert_eq!(client().authorization(), None);
}

#[test]
fn authorization_uses_bearer_scheme() {
    let client = client().with_token(Some("tok1"));
    assert_eq!(client.authorization().as_deref(), Some("Bearer tok1"));
}

#[test]
fn with_token_none_clears_token() {
    let client = client().with_token(Some("tok1")).with_token(None);
    assert_eq!(client.authorization(), None);
}

#[test]
fn with_query_skips_absent_params() {
    assert_eq!(with_query("/packages/", &[("category", None)]), "/packages/");
}

#[test]
fn with_query_appends_present_params() {
    assert_eq!(
        with_query("/bookings/", &[("status_filter", Some("completed")), ("skip", None), ("limit", Some("5"))]),
        "/bookings/?status_filter=completed&limit=5"
    );
}

#[test]
fn catalog_scope_only_sends_flag_for_all() {
    assert_eq!(CatalogScope::Active.active_only(), None);
    let params = [("category", None), ("active_only", CatalogScope::All.active_only())];
    assert_eq!(with_query("/addons/", &params), "/addons/?active_only=false");
}

// =============================================================
// Delivery upsert
// =============================================================

/// Delivery endpoints with a canned lookup that record every write.
struct FakeDeliveries {
    lookup: Result<Delivery, ApiError>,
    created: RefCell<Vec<DeliveryInput>>,
    updated: RefCell<Vec<(String, DeliveryInput)>>,
}

impl FakeDeliveries {
    fn answering(lookup: Result<Delivery, ApiError>) -> Self {
        Self { lookup, created: RefCell::new(Vec::new()), updated: RefCell::new(Vec::new()) }
    }
}

impl DeliveryGateway for FakeDeliveries {
    async fn get_delivery(&self, _booking_id: &str) -> Result<Delivery, ApiError> {
        self.lookup.clone()
    }

    async fn create_delivery(&self, input: &DeliveryInput) -> Result<Delivery, ApiError> {
        self.created.borrow_mut().push(input.clone());
        Ok(stored("b-1"))
    }

    async fn update_delivery(&self, booking_id: &str, input: &DeliveryInput) -> Result<Delivery, ApiError> {
        self.updated.borrow_mut().push((booking_id.to_owned(), input.clone()));
        Ok(stored(booking_id))
    }
}

fn stored(booking_id: &str) -> Delivery {
    Delivery {
        id: "d-1".to_owned(),
        booking_id: booking_id.to_owned(),
        photo_urls: vec!["https://x/old.jpg".to_owned()],
        video_urls: vec!["https://x/film.mp4".to_owned()],
        download_links: Vec::new(),
        notes: None,
        delivered_at: None,
    }
}

fn upload() -> DeliveryInput {
    DeliveryInput {
        booking_id: Some("stale".to_owned()),
        photo_urls: vec!["https://x/new.jpg".to_owned()],
        ..DeliveryInput::default()
    }
}

#[test]
fn upsert_creates_with_booking_id_when_missing() {
    let missing = ApiError::from_status(404, r#"{"detail":"Delivery not found"}"#);
    let gateway = FakeDeliveries::answering(Err(missing));
    let (_, write) = block_on(gateway.upsert_delivery("b-1", upload())).unwrap();
    assert_eq!(write, DeliveryWrite::Created);
    assert!(gateway.updated.borrow().is_empty());
    let created = gateway.created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].booking_id.as_deref(), Some("b-1"));
    assert_eq!(created[0].photo_urls, vec!["https://x/new.jpg"]);
}

#[test]
fn upsert_updates_without_booking_id_when_present() {
    let gateway = FakeDeliveries::answering(Ok(stored("b-1")));
    let (_, write) = block_on(gateway.upsert_delivery("b-1", upload())).unwrap();
    assert_eq!(write, DeliveryWrite::Updated);
    assert!(gateway.created.borrow().is_empty());
    let updated = gateway.updated.borrow();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "b-1");
    assert_eq!(updated[0].1.booking_id, None);
}

#[test]
fn upsert_update_body_leaves_videos_untouched() {
    let gateway = FakeDeliveries::answering(Ok(stored("b-1")));
    block_on(gateway.upsert_delivery("b-1", upload())).unwrap();
    let updated = gateway.updated.borrow();
    let body = serde_json::to_value(&updated[0].1).unwrap();
    assert!(body.get("video_urls").is_none());
    assert!(body.get("booking_id").is_none());
}

#[test]
fn upsert_returns_other_lookup_errors_without_writing() {
    let failure = ApiError::from_status(500, r#"{"detail":"boom"}"#);
    let gateway = FakeDeliveries::answering(Err(failure.clone()));
    let result = block_on(gateway.upsert_delivery("b-1", upload()));
    assert_eq!(result, Err(failure));
    assert!(gateway.created.borrow().is_empty());
    assert!(gateway.updated.borrow().is_empty());
}

// =============================================================
// Native fallback
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let client = client();
    let result = block_on(client.list_packages(Some(PackageCategory::Combo), CatalogScope::Active));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "csr"))]
#[test]
fn login_is_unavailable_outside_browser() {
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() };
    let result = block_on(client().login(&request));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "csr"))]
#[test]
fn upsert_propagates_lookup_failure() {
    let result = block_on(client().upsert_delivery("b-1", DeliveryInput::default()));
    assert_eq!(result, Err(ApiError::Unavailable));
}
