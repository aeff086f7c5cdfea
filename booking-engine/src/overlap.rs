//! Conflict detection policies
//!
//! Two policies per the booking model:
//!
//! - **Seat-scoped**: grid-cell occupancy. The candidate hour set (from
//!   [`crate::grid`]) conflicts when it intersects hours already occupied on
//!   that seat by *other* customers. A customer's own active shift on the
//!   seat is excluded upstream so they can view and extend their own slot.
//! - **Time-scoped**: plain half-open interval overlap, evaluated only
//!   against the *same* customer's other active unallocated bookings.
//!   Cross-customer unallocated overlap is allowed: no physical seat is
//!   contended.
//!
//! The store-facing wrapper in [`crate::engine`] fails closed: a failed
//! lookup of existing bookings is reported as a conflict, never as a clear
//! slot.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use shared::models::Shift;

/// Seat-scoped policy: conflict iff the candidate hour set intersects the
/// hours already occupied on the seat.
pub fn seat_conflict(occupied: &BTreeSet<u32>, candidate: &BTreeSet<u32>) -> bool {
    candidate.iter().any(|h| occupied.contains(h))
}

/// Standard half-open interval overlap: `[a_start, a_end)` meets
/// `[b_start, b_end)`.
pub fn intervals_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_end > b_start && a_start < b_end
}

/// Time-scoped policy for unallocated bookings: conflict iff the candidate
/// interval overlaps any of the given existing bookings. The caller passes
/// only the same customer's other active unallocated shifts.
pub fn unallocated_conflict(
    existing: &[Shift],
    candidate_start: NaiveDateTime,
    candidate_end: NaiveDateTime,
) -> bool {
    existing.iter().any(|shift| {
        intervals_overlap(
            shift.start_time,
            shift.end_time,
            candidate_start,
            candidate_end,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::{Seat, ShiftStatus};

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn unallocated_shift(start: &str, end: &str) -> Shift {
        Shift {
            id: "s1".into(),
            business_id: "b1".into(),
            customer_id: "m1".into(),
            seat: Seat::Unallocated,
            start_time: dt(start),
            end_time: dt(end),
            payment_rate: Decimal::new(500, 2),
            status: ShiftStatus::Active,
            created_by: "staff1".into(),
            created_at: dt("2025-01-01 00:00:00"),
        }
    }

    #[test]
    fn seat_conflict_is_set_intersection() {
        let occupied: BTreeSet<u32> = [11].into_iter().collect();
        let candidate: BTreeSet<u32> = [10, 11, 12].into_iter().collect();
        assert!(seat_conflict(&occupied, &candidate));

        let free: BTreeSet<u32> = [13, 14].into_iter().collect();
        assert!(!seat_conflict(&occupied, &free));
    }

    #[test]
    fn interval_overlap_is_half_open() {
        let a = (dt("2025-01-06 20:00:00"), dt("2025-01-07 04:00:00"));

        // Window Tue 00:00 - Wed 00:00 includes the overnight shift
        assert!(intervals_overlap(
            a.0,
            a.1,
            dt("2025-01-07 00:00:00"),
            dt("2025-01-08 00:00:00")
        ));
        // Window ending exactly at the shift start excludes it
        assert!(!intervals_overlap(
            a.0,
            a.1,
            dt("2025-01-06 00:00:00"),
            dt("2025-01-06 20:00:00")
        ));
    }

    #[test]
    fn unallocated_conflict_within_same_customer() {
        let existing = vec![unallocated_shift("2025-01-05 09:00:00", "2025-01-05 11:00:00")];
        assert!(unallocated_conflict(
            &existing,
            dt("2025-01-05 10:00:00"),
            dt("2025-01-05 12:00:00")
        ));
        assert!(!unallocated_conflict(
            &existing,
            dt("2025-01-05 11:00:00"),
            dt("2025-01-05 13:00:00")
        ));
    }
}
