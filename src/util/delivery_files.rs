//! Flatten a delivery into the rows the client's download list shows.

#[cfg(test)]
#[path = "delivery_files_test.rs"]
mod delivery_files_test;

use crate::net::types::{Booking, Delivery, Profile};

pub const MSG_NOT_OWNER: &str = "You do not have permission to view this delivery.";
pub const MSG_NOT_DELIVERED: &str = "No delivery available for this booking yet.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Photo,
    Video,
    Link,
}

impl FileKind {
    /// Call to action on the row's button.
    pub fn action(self) -> &'static str {
        match self {
            Self::Photo | Self::Video => "Download",
            Self::Link => "Open",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryFile {
    pub kind: FileKind,
    pub label: String,
    pub url: String,
}

/// Photos, then videos, then external links, each in server order.
pub fn delivery_files(delivery: &Delivery) -> Vec<DeliveryFile> {
    let media = |urls: &[String], kind: FileKind, noun: &str| {
        urls.iter()
            .enumerate()
            .map(|(idx, url)| DeliveryFile { kind, label: file_label(url, noun, idx), url: url.clone() })
            .collect::<Vec<_>>()
    };
    let mut files = media(&delivery.photo_urls, FileKind::Photo, "Photo");
    files.extend(media(&delivery.video_urls, FileKind::Video, "Video"));
    files.extend(delivery.download_links.iter().enumerate().map(|(idx, link)| {
        let label = link
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| (!link.kind.is_empty()).then(|| link.kind.clone()))
            .unwrap_or_else(|| format!("Link {}", idx + 1));
        DeliveryFile { kind: FileKind::Link, label, url: link.url.clone() }
    }));
    files
}

/// Last path segment of `url`, or a numbered fallback when it has none.
fn file_label(url: &str, noun: &str, idx: usize) -> String {
    match url.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("{noun} {}", idx + 1),
    }
}

/// Clients may only open deliveries for their own bookings.
pub fn owns_booking(user: &Profile, booking: &Booking) -> bool {
    booking.user_id == user.id
}
