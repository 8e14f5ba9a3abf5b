//! Booking form: add-on selection, running total, and request assembly.

#[cfg(test)]
#[path = "booking_form_test.rs"]
mod booking_form_test;

use crate::net::types::{AddOn, BookingAddOnItem, BookingRequest};

pub const CURRENCY: &str = "ETB";
pub const MSG_BOOKING_REQUIRED: &str = "Please fill in the event type, date, time and location.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub event_type: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    pub notes: String,
    /// Selected add-on ids, in selection order.
    pub selected_addons: Vec<String>,
}

impl BookingForm {
    /// Select `addon_id` if unselected, otherwise unselect it.
    pub fn toggle_addon(&mut self, addon_id: &str) {
        if let Some(pos) = self.selected_addons.iter().position(|id| id == addon_id) {
            self.selected_addons.remove(pos);
        } else {
            self.selected_addons.push(addon_id.to_owned());
        }
    }

    pub fn is_selected(&self, addon_id: &str) -> bool {
        self.selected_addons.iter().any(|id| id == addon_id)
    }

    /// Build the request body for `package_id`; every add-on has quantity 1.
    pub fn to_request(&self, package_id: &str) -> Result<BookingRequest, &'static str> {
        let required = [&self.event_type, &self.event_date, &self.event_time, &self.location];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(MSG_BOOKING_REQUIRED);
        }
        let notes = self.notes.trim();
        Ok(BookingRequest {
            package_id: package_id.to_owned(),
            event_type: self.event_type.trim().to_owned(),
            event_date: self.event_date.trim().to_owned(),
            event_time: self.event_time.trim().to_owned(),
            location: self.location.trim().to_owned(),
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
            addon_ids: self
                .selected_addons
                .iter()
                .map(|id| BookingAddOnItem { addon_id: id.clone(), quantity: 1 })
                .collect(),
        })
    }
}

/// Package price plus each selected add-on; ids not in `addons` add nothing.
pub fn booking_total(package_price: f64, addons: &[AddOn], selected: &[String]) -> f64 {
    selected
        .iter()
        .filter_map(|id| addons.iter().find(|addon| &addon.id == id))
        .fold(package_price, |sum, addon| sum + addon.price)
}

/// `ETB 1500.00`.
pub fn format_price(amount: f64) -> String {
    format!("{CURRENCY} {amount:.2}")
}
