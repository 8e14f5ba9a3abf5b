//! Client-side views over already-fetched booking lists.

#[cfg(test)]
#[path = "booking_list_test.rs"]
mod booking_list_test;

use crate::net::types::{Booking, BookingStatus};

/// Bookings with `status`, or all of them when `status` is `None`.
pub fn filter_by_status(bookings: &[Booking], status: Option<BookingStatus>) -> Vec<Booking> {
    bookings.iter().filter(|b| status.is_none_or(|s| b.status == s)).cloned().collect()
}

/// Completed bookings, the ones eligible for a delivery upload.
pub fn completed(bookings: &[Booking]) -> Vec<Booking> {
    filter_by_status(bookings, Some(BookingStatus::Completed))
}

/// The `limit` most recently created bookings, newest first.
pub fn most_recent(bookings: &[Booking], limit: usize) -> Vec<Booking> {
    let mut sorted = bookings.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Counters shown on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_bookings: usize,
    pub pending: usize,
    pub approved: usize,
    pub completed: usize,
    pub packages: usize,
    pub addons: usize,
}

impl DashboardStats {
    pub fn compute(bookings: &[Booking], package_count: usize, addon_count: usize) -> Self {
        let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
        Self {
            total_bookings: bookings.len(),
            pending: count(BookingStatus::Pending),
            approved: count(BookingStatus::Approved),
            completed: count(BookingStatus::Completed),
            packages: package_count,
            addons: addon_count,
        }
    }
}
