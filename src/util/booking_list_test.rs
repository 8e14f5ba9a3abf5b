use super::*;

fn booking(id: &str, status: BookingStatus, created_at: &str) -> Booking {
    Booking {
        id: id.to_owned(),
        user_id: "u-1".to_owned(),
        package_id: "p-1".to_owned(),
        event_type: "Birthday".to_owned(),
        event_date: "2026-11-01".to_owned(),
        event_time: "10:00:00".to_owned(),
        location: "Hawassa".to_owned(),
        status,
        total_price: 800.0,
        notes: None,
        admin_notes: None,
        created_at: created_at.to_owned(),
        addons: Vec::new(),
        user: None,
        package: None,
    }
}

fn sample() -> Vec<Booking> {
    vec![
        booking("b-1", BookingStatus::Pending, "2026-10-01T08:00:00"),
        booking("b-2", BookingStatus::Approved, "2026-10-03T08:00:00"),
        booking("b-3", BookingStatus::Completed, "2026-10-02T08:00:00"),
        booking("b-4", BookingStatus::Pending, "2026-10-05T08:00:00"),
        booking("b-5", BookingStatus::Rejected, "2026-09-30T08:00:00"),
    ]
}

fn ids(bookings: &[Booking]) -> Vec<&str> {
    bookings.iter().map(|b| b.id.as_str()).collect()
}

// =============================================================
// filter_by_status
// =============================================================

#[test]
fn no_filter_keeps_everything_in_order() {
    assert_eq!(ids(&filter_by_status(&sample(), None)), ["b-1", "b-2", "b-3", "b-4", "b-5"]);
}

#[test]
fn filter_keeps_matching_status() {
    assert_eq!(ids(&filter_by_status(&sample(), Some(BookingStatus::Pending))), ["b-1", "b-4"]);
    assert_eq!(ids(&filter_by_status(&sample(), Some(BookingStatus::Completed))), ["b-3"]);
}

#[test]
fn completed_lists_delivery_candidates() {
    assert_eq!(ids(&completed(&sample())), ["b-3"]);
}

// =============================================================
// most_recent
// =============================================================

#[test]
fn most_recent_sorts_newest_first_and_truncates() {
    assert_eq!(ids(&most_recent(&sample(), 3)), ["b-4", "b-2", "b-3"]);
}

#[test]
fn most_recent_handles_short_lists() {
    assert_eq!(most_recent(&[], 5).len(), 0);
    assert_eq!(most_recent(&sample(), 10).len(), 5);
}

// =============================================================
// DashboardStats
// =============================================================

#[test]
fn stats_count_each_status() {
    let stats = DashboardStats::compute(&sample(), 4, 7);
    assert_eq!(
        stats,
        DashboardStats { total_bookings: 5, pending: 2, approved: 1, completed: 1, packages: 4, addons: 7 }
    );
}

#[test]
fn stats_for_empty_inventory() {
    assert_eq!(DashboardStats::compute(&[], 0, 0), DashboardStats::default());
}
