use super::*;

fn package_form() -> PackageForm {
    PackageForm {
        title: "Gold Wedding".to_owned(),
        description: "Full-day coverage".to_owned(),
        category: PackageCategory::Combo,
        price: "15000".to_owned(),
        duration: "8".to_owned(),
        features: "Album, Drone shots, , Highlight reel ".to_owned(),
    }
}

// =============================================================
// Parsers
// =============================================================

#[test]
fn features_split_on_commas_and_drop_blanks() {
    assert_eq!(parse_features(" a, b ,,c,"), vec!["a", "b", "c"]);
    assert!(parse_features(" , ").is_empty());
}

#[test]
fn url_lines_drop_blank_lines() {
    assert_eq!(
        parse_url_lines("https://x/1.jpg\n\n  https://x/2.jpg  \r\n"),
        vec!["https://x/1.jpg", "https://x/2.jpg"]
    );
}

#[test]
fn price_must_be_non_negative_number() {
    assert_eq!(parse_price(" 12.50 "), Some(12.5));
    assert_eq!(parse_price("0"), Some(0.0));
    assert_eq!(parse_price("-1"), None);
    assert_eq!(parse_price("abc"), None);
    assert_eq!(parse_price("inf"), None);
}

// =============================================================
// PackageForm
// =============================================================

#[test]
fn package_form_builds_input() {
    let input = package_form().to_input().unwrap();
    assert_eq!(input.features, vec!["Album", "Drone shots", "Highlight reel"]);
    assert_eq!(input.duration, Some(8));
    assert!((input.price - 15000.0).abs() < 1e-9);
}

#[test]
fn package_form_requires_a_feature() {
    let form = PackageForm { features: " , ".to_owned(), ..package_form() };
    assert_eq!(form.to_input(), Err(MSG_FEATURES_REQUIRED));
}

#[test]
fn package_form_blank_duration_is_none() {
    let form = PackageForm { duration: "  ".to_owned(), ..package_form() };
    assert_eq!(form.to_input().map(|i| i.duration), Ok(None));
}

#[test]
fn package_form_rejects_zero_duration() {
    let form = PackageForm { duration: "0".to_owned(), ..package_form() };
    assert_eq!(form.to_input(), Err(MSG_INVALID_DURATION));
}

#[test]
fn package_form_rejects_bad_price() {
    let form = PackageForm { price: "free".to_owned(), ..package_form() };
    assert_eq!(form.to_input(), Err(MSG_INVALID_PRICE));
}

#[test]
fn package_form_prefills_from_package() {
    let package = Package {
        id: "p-1".to_owned(),
        title: "Silver".to_owned(),
        description: "Half day".to_owned(),
        category: PackageCategory::Photography,
        price: 5000.0,
        duration: None,
        features: vec!["Prints".to_owned(), "USB".to_owned()],
        is_active: true,
        created_at: None,
    };
    let form = PackageForm::from_package(&package);
    assert_eq!(form.features, "Prints, USB");
    assert_eq!(form.price, "5000.00");
    assert!(form.duration.is_empty());
}

// =============================================================
// AddOnForm
// =============================================================

#[test]
fn addon_form_blank_description_is_none() {
    let form = AddOnForm { name: "Drone".to_owned(), price: "300".to_owned(), ..AddOnForm::default() };
    let input = form.to_input().unwrap();
    assert_eq!(input.description, None);
    assert!(input.is_active);
    assert_eq!(input.category, AddOnCategory::Other);
}

#[test]
fn addon_form_requires_name() {
    let form = AddOnForm { price: "300".to_owned(), ..AddOnForm::default() };
    assert_eq!(form.to_input(), Err(MSG_NAME_REQUIRED));
}

// =============================================================
// DeliveryForm
// =============================================================

fn existing_delivery() -> Delivery {
    Delivery {
        id: "d-1".to_owned(),
        booking_id: "b-1".to_owned(),
        photo_urls: vec!["https://x/1.jpg".to_owned(), "https://x/2.jpg".to_owned()],
        video_urls: Vec::new(),
        download_links: vec![DownloadLink {
            kind: "gallery".to_owned(),
            url: "https://g/1".to_owned(),
            description: None,
        }],
        notes: Some("Enjoy".to_owned()),
        delivered_at: None,
    }
}

#[test]
fn delivery_form_builds_gallery_link() {
    let form = DeliveryForm {
        photo_urls: "https://x/1.jpg\n\nhttps://x/2.jpg".to_owned(),
        gallery_url: " https://gallery.example/abc ".to_owned(),
        notes: " Thanks! ".to_owned(),
    };
    let input = form.to_input();
    assert_eq!(input.photo_urls.len(), 2);
    assert_eq!(
        input.download_links,
        vec![DownloadLink {
            kind: "gallery".to_owned(),
            url: "https://gallery.example/abc".to_owned(),
            description: Some("Gallery".to_owned()),
        }]
    );
    assert_eq!(input.notes.as_deref(), Some("Thanks!"));
    assert_eq!(input.booking_id, None);
}

#[test]
fn delivery_form_without_gallery_sends_no_links() {
    let input = DeliveryForm { photo_urls: "https://x/1.jpg".to_owned(), ..DeliveryForm::default() }.to_input();
    assert!(input.download_links.is_empty());
    assert_eq!(input.notes, None);
}

#[test]
fn delivery_form_body_leaves_videos_out() {
    let input = DeliveryForm { photo_urls: "https://x/a.jpg".to_owned(), ..DeliveryForm::default() }.to_input();
    assert_eq!(input.video_urls, None);
    let body = serde_json::to_value(&input).unwrap();
    assert!(body.get("video_urls").is_none());
    assert_eq!(body["photo_urls"], serde_json::json!(["https://x/a.jpg"]));
}

#[test]
fn delivery_form_prefills_from_existing_delivery() {
    let delivery = existing_delivery();
    let form = DeliveryForm::from_delivery(&delivery);
    assert_eq!(form.photo_urls, "https://x/1.jpg\nhttps://x/2.jpg");
    assert_eq!(form.gallery_url, "https://g/1");
    assert_eq!(form.notes, "Enjoy");
}

#[test]
fn delivery_prefill_applies_to_current_selection() {
    let form = DeliveryForm::prefill_for("b-1", "b-1", &existing_delivery()).unwrap();
    assert_eq!(form.gallery_url, "https://g/1");
}

#[test]
fn delivery_prefill_dropped_after_selection_changes() {
    assert_eq!(DeliveryForm::prefill_for("b-2", "b-1", &existing_delivery()), None);
    assert_eq!(DeliveryForm::prefill_for("", "b-1", &existing_delivery()), None);
}
