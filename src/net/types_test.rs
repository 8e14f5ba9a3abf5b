use super::*;

// =============================================================
// Helpers
// =============================================================

fn booking_json() -> serde_json::Value {
    serde_json::json!({
        "id": "b-1",
        "user_id": "u-1",
        "package_id": "p-1",
        "event_type": "Wedding",
        "event_date": "2026-11-02",
        "event_time": "14:00:00",
        "location": "Addis Ababa",
        "status": "pending",
        "total_price": "2500.00",
        "notes": null,
        "admin_notes": null,
        "created_at": "2026-10-01T09:30:00",
        "updated_at": "2026-10-01T09:30:00",
        "booking_addons": [{
            "id": "ba-1",
            "quantity": 1,
            "addon": {
                "id": "a-1",
                "name": "Drone",
                "description": null,
                "price": "300.00",
                "category": "equipment",
                "is_active": true,
                "created_at": "2026-01-01T00:00:00"
            }
        }]
    })
}

// =============================================================
// Role / Profile
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn profile_accepts_numeric_id_and_missing_fields() {
    let profile: Profile = serde_json::from_value(serde_json::json!({ "id": 1, "role": "client" })).unwrap();
    assert_eq!(profile.id, "1");
    assert_eq!(profile.role, Role::Client);
    assert!(profile.full_name.is_empty());
    assert!(profile.phone.is_none());
}

#[test]
fn profile_survives_storage_round_trip() {
    let profile = Profile {
        id: "u-9".to_owned(),
        full_name: "Hana T".to_owned(),
        email: "hana@example.com".to_owned(),
        phone: Some("+251 911 000000".to_owned()),
        role: Role::Admin,
    };
    let raw = serde_json::to_string(&profile).unwrap();
    assert_eq!(serde_json::from_str::<Profile>(&raw).unwrap(), profile);
}

#[test]
fn auth_grant_ignores_token_type() {
    let grant: AuthGrant = serde_json::from_value(serde_json::json!({
        "access_token": "tok",
        "token_type": "bearer",
        "user": { "id": "u-1", "email": "a@b.com", "full_name": "A", "phone": null, "role": "admin" }
    }))
    .unwrap();
    assert_eq!(grant.access_token, "tok");
    assert_eq!(grant.user.role, Role::Admin);
}

#[test]
fn login_request_debug_redacts_password() {
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() };
    let rendered = format!("{request:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("secret"));
}

// =============================================================
// Prices
// =============================================================

#[test]
fn package_price_decodes_from_decimal_string() {
    let package: Package = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "title": "Gold",
        "description": "Full day",
        "category": "combo",
        "price": "1500.50",
        "duration": 8,
        "features": ["Album"],
        "is_active": true
    }))
    .unwrap();
    assert!((package.price - 1500.5).abs() < f64::EPSILON);
    assert_eq!(package.duration, Some(8));
}

#[test]
fn addon_price_decodes_from_number() {
    let addon: AddOn = serde_json::from_value(serde_json::json!({
        "id": "a-1", "name": "Drone", "price": 300, "category": "equipment"
    }))
    .unwrap();
    assert!((addon.price - 300.0).abs() < f64::EPSILON);
    assert!(addon.is_active);
}

#[test]
fn price_rejects_non_numeric_string() {
    let result = serde_json::from_value::<AddOn>(serde_json::json!({
        "id": "a-1", "name": "Drone", "price": "cheap", "category": "equipment"
    }));
    assert!(result.is_err());
}

// =============================================================
// Bookings
// =============================================================

#[test]
fn booking_reads_aliased_addons() {
    let booking: Booking = serde_json::from_value(booking_json()).unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.addons.len(), 1);
    assert_eq!(booking.addons[0].addon.name, "Drone");
    assert!(booking.package.is_none());
}

#[test]
fn booking_status_parse_matches_wire_names() {
    for status in BookingStatus::ALL {
        assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(BookingStatus::parse("cancelled"), None);
}

#[test]
fn status_update_omits_absent_fields() {
    let update = BookingStatusUpdate { status: Some(BookingStatus::Approved), admin_notes: None };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "status": "approved" }));
}

#[test]
fn package_category_parse_round_trips() {
    for category in PackageCategory::ALL {
        assert_eq!(PackageCategory::parse(category.as_str()), Some(category));
    }
    assert_eq!(PackageCategory::parse(""), None);
}

// =============================================================
// Delivery
// =============================================================

#[test]
fn delivery_treats_null_lists_as_empty() {
    let delivery: Delivery = serde_json::from_value(serde_json::json!({
        "id": "d-1",
        "booking_id": "b-1",
        "photo_urls": null,
        "video_urls": null,
        "download_links": [{ "type": "gallery", "url": "https://g.example/1", "description": "Gallery" }],
        "notes": "Enjoy",
        "delivered_at": "2026-10-10T10:00:00",
        "created_at": "2026-10-10T10:00:00"
    }))
    .unwrap();
    assert!(delivery.photo_urls.is_empty());
    assert!(delivery.video_urls.is_empty());
    assert_eq!(delivery.gallery_link().map(|l| l.url.as_str()), Some("https://g.example/1"));
}

#[test]
fn delivery_input_skips_booking_id_on_update() {
    let input = DeliveryInput { photo_urls: vec!["https://x/1.jpg".to_owned()], ..DeliveryInput::default() };
    let value = serde_json::to_value(&input).unwrap();
    assert!(value.get("booking_id").is_none());
    assert_eq!(value["photo_urls"], serde_json::json!(["https://x/1.jpg"]));
}

#[test]
fn download_link_uses_type_key() {
    let link = DownloadLink { kind: "gallery".to_owned(), url: "u".to_owned(), description: None };
    assert_eq!(serde_json::to_value(&link).unwrap()["type"], "gallery");
}
