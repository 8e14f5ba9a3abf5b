//! Admin editing forms: packages, add-ons, and delivery uploads.
//!
//! Each form keeps raw text inputs and converts to a request body in one
//! checked step, so pages only deal with strings until submit.

#[cfg(test)]
#[path = "admin_forms_test.rs"]
mod admin_forms_test;

use crate::net::types::{
    AddOn, AddOnCategory, AddOnInput, Delivery, DeliveryInput, DownloadLink, GALLERY_LINK_KIND, Package,
    PackageCategory, PackageInput,
};

pub const MSG_FEATURES_REQUIRED: &str = "Please enter at least one feature (comma separated).";
pub const MSG_TITLE_REQUIRED: &str = "Please enter a title and description.";
pub const MSG_NAME_REQUIRED: &str = "Please enter a name.";
pub const MSG_INVALID_PRICE: &str = "Please enter a valid price.";
pub const MSG_INVALID_DURATION: &str = "Duration must be a whole number of hours.";

/// Split a comma-separated feature list, dropping blanks.
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|f| !f.is_empty()).map(str::to_owned).collect()
}

/// Split one URL per line, dropping blanks.
pub fn parse_url_lines(raw: &str) -> Vec<String> {
    raw.lines().map(str::trim).filter(|u| !u.is_empty()).map(str::to_owned).collect()
}

/// Non-negative finite decimal.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
}

/// Blank means "no duration"; otherwise a positive whole number of hours.
fn parse_duration(raw: &str) -> Result<Option<u32>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(hours) if hours >= 1 => Ok(Some(hours)),
        _ => Err(MSG_INVALID_DURATION),
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

// =============================================================================
// Packages
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageForm {
    pub title: String,
    pub description: String,
    pub category: PackageCategory,
    pub price: String,
    pub duration: String,
    pub features: String,
}

impl Default for PackageForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: PackageCategory::Photography,
            price: String::new(),
            duration: String::new(),
            features: String::new(),
        }
    }
}

impl PackageForm {
    /// Pre-fill from an existing package for editing.
    pub fn from_package(package: &Package) -> Self {
        Self {
            title: package.title.clone(),
            description: package.description.clone(),
            category: package.category,
            price: format!("{:.2}", package.price),
            duration: package.duration.map(|d| d.to_string()).unwrap_or_default(),
            features: package.features.join(", "),
        }
    }

    pub fn to_input(&self) -> Result<PackageInput, &'static str> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(MSG_TITLE_REQUIRED);
        }
        let features = parse_features(&self.features);
        if features.is_empty() {
            return Err(MSG_FEATURES_REQUIRED);
        }
        let price = parse_price(&self.price).ok_or(MSG_INVALID_PRICE)?;
        let duration = parse_duration(&self.duration)?;
        Ok(PackageInput {
            title: title.to_owned(),
            description: description.to_owned(),
            category: self.category,
            price,
            duration,
            features,
        })
    }
}

// =============================================================================
// Add-ons
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddOnForm {
    pub name: String,
    pub description: String,
    pub category: AddOnCategory,
    pub price: String,
    pub is_active: bool,
}

impl Default for AddOnForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: AddOnCategory::Other,
            price: String::new(),
            is_active: true,
        }
    }
}

impl AddOnForm {
    pub fn from_addon(addon: &AddOn) -> Self {
        Self {
            name: addon.name.clone(),
            description: addon.description.clone().unwrap_or_default(),
            category: addon.category,
            price: format!("{:.2}", addon.price),
            is_active: addon.is_active,
        }
    }

    pub fn to_input(&self) -> Result<AddOnInput, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MSG_NAME_REQUIRED);
        }
        let price = parse_price(&self.price).ok_or(MSG_INVALID_PRICE)?;
        Ok(AddOnInput {
            name: name.to_owned(),
            description: optional_text(&self.description),
            price,
            category: self.category,
            is_active: self.is_active,
        })
    }
}

// =============================================================================
// Delivery
// =============================================================================

/// Upload form: photo URLs one per line, an optional gallery link, notes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryForm {
    pub photo_urls: String,
    pub gallery_url: String,
    pub notes: String,
}

impl DeliveryForm {
    /// Pre-fill from a delivery already on file.
    pub fn from_delivery(delivery: &Delivery) -> Self {
        Self {
            photo_urls: delivery.photo_urls.join("\n"),
            gallery_url: delivery.gallery_link().map(|l| l.url.clone()).unwrap_or_default(),
            notes: delivery.notes.clone().unwrap_or_default(),
        }
    }

    /// Pre-fill from the delivery looked up for `requested`, unless the
    /// selection has since moved to another booking.
    pub fn prefill_for(selected: &str, requested: &str, delivery: &Delivery) -> Option<Self> {
        (selected == requested).then(|| Self::from_delivery(delivery))
    }

    /// Build the body for create/update; the booking id is set by the upsert.
    /// Videos are left out so an update keeps the ones already on file.
    pub fn to_input(&self) -> DeliveryInput {
        let download_links: Vec<DownloadLink> = optional_text(&self.gallery_url)
            .map(|url| DownloadLink {
                kind: GALLERY_LINK_KIND.to_owned(),
                url,
                description: Some("Gallery".to_owned()),
            })
            .into_iter()
            .collect();
        DeliveryInput {
            booking_id: None,
            photo_urls: parse_url_lines(&self.photo_urls),
            video_urls: None,
            download_links,
            notes: optional_text(&self.notes),
        }
    }
}
