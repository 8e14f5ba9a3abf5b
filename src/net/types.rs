//! Wire DTOs for the booking REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON so serde stays lossless. Closed sets
//! (roles, categories, statuses) are enums: an unexpected string fails to
//! decode instead of silently comparing unequal later.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Identity
// =============================================================================

/// Account role. Determines which routes are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Admin => "admin",
        }
    }
}

/// User profile as returned alongside an access token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// User identifier (UUID string; numeric ids are accepted and stringified).
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
}

/// Successful response body of `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthGrant {
    pub access_token: String,
    pub user: Profile,
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest").field("email", &self.email).field("password", &"<redacted>").finish()
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Packages
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageCategory {
    Photography,
    Videography,
    Combo,
    Editing,
}

impl PackageCategory {
    pub const ALL: [Self; 4] = [Self::Photography, Self::Videography, Self::Combo, Self::Editing];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photography => "photography",
            Self::Videography => "videography",
            Self::Combo => "combo",
            Self::Editing => "editing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Photography => "Photography",
            Self::Videography => "Videography",
            Self::Combo => "Photo + Video",
            Self::Editing => "Editing",
        }
    }

    /// Parse a `<select>` value; anything unrecognized is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// A bookable service package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PackageCategory,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    /// Coverage duration in hours.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update body for `/packages/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PackageInput {
    pub title: String,
    pub description: String,
    pub category: PackageCategory,
    pub price: f64,
    pub duration: Option<u32>,
    pub features: Vec<String>,
}

// =============================================================================
// Add-ons
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOnCategory {
    Equipment,
    Personnel,
    Editing,
    Other,
}

impl AddOnCategory {
    pub const ALL: [Self; 4] = [Self::Equipment, Self::Personnel, Self::Editing, Self::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Personnel => "personnel",
            Self::Editing => "editing",
            Self::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Optional extra that can be attached to a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    pub category: AddOnCategory,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Create/update body for `/addons/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddOnInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: AddOnCategory,
    pub is_active: bool,
}

// =============================================================================
// Bookings
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl BookingStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Approved, Self::Rejected, Self::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// An add-on line on a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingAddOn {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub addon: AddOn,
    pub quantity: u32,
}

/// A client booking. Detail endpoints embed the package and the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub package_id: String,
    pub event_type: String,
    /// ISO date (`YYYY-MM-DD`).
    pub event_date: String,
    /// `HH:MM[:SS]`.
    pub event_time: String,
    pub location: String,
    pub status: BookingStatus,
    #[serde(deserialize_with = "deserialize_price")]
    pub total_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    /// ISO 8601 timestamp; lexical order matches chronological order.
    pub created_at: String,
    #[serde(default, alias = "booking_addons")]
    pub addons: Vec<BookingAddOn>,
    #[serde(default)]
    pub user: Option<Profile>,
    #[serde(default)]
    pub package: Option<Package>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingAddOnItem {
    pub addon_id: String,
    pub quantity: u32,
}

/// Body of `POST /bookings/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub package_id: String,
    pub event_type: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub notes: Option<String>,
    pub addon_ids: Vec<BookingAddOnItem>,
}

/// Body of `PUT /bookings/{id}/status`. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookingStatusUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

// =============================================================================
// Delivery
// =============================================================================

pub const GALLERY_LINK_KIND: &str = "gallery";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Link kind (`gallery`, `google_drive`, `dropbox`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Delivered media for a completed booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub booking_id: String,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub photo_urls: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub video_urls: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub download_links: Vec<DownloadLink>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub delivered_at: Option<String>,
}

impl Delivery {
    pub fn gallery_link(&self) -> Option<&DownloadLink> {
        self.download_links.iter().find(|link| link.kind == GALLERY_LINK_KIND)
    }
}

/// Create/update body for `/delivery/`. `booking_id` is only sent on create.
///
/// The server applies only the keys present on update, so an absent
/// `video_urls` keeps the videos already on file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    pub photo_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_urls: Option<Vec<String>>,
    pub download_links: Vec<DownloadLink>,
    pub notes: Option<String>,
}

// =============================================================================
// Lenient decoders
// =============================================================================

fn default_true() -> bool {
    true
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}

/// Decimal columns serialize as JSON strings (`"1500.00"`); accept numbers too.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    match value {
        Some(price) if price.is_finite() => Ok(price),
        _ => Err(D::Error::custom("expected decimal price")),
    }
}

fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
