//! Hour grid projection
//!
//! Projects absolute booking instants onto the business's cyclic hour-of-day
//! grid. Hours are bucket indices 0..=23. A span whose end hour precedes its
//! start hour wraps past midnight: it occupies `[start, close)` plus
//! `[open, end)` rather than being rejected as "end before start".

use std::collections::BTreeSet;

use chrono::{NaiveDateTime, Timelike};
use shared::{EngineError, EngineResult};

/// Extract the hour-of-day pair from a booking's start and end instants.
pub fn hour_range(start: NaiveDateTime, end: NaiveDateTime) -> (u32, u32) {
    (start.time().hour(), end.time().hour())
}

/// Hour pair for a booking, with the booking-length validation the bucket
/// model requires.
///
/// A booking's instants may span many calendar days (a month-long
/// subscription shift runs daily between its two times of day), so only the
/// hour-of-day pair matters here. Rejected as `InvalidRange`:
/// - `end <= start`
/// - endpoints landing in the same hour bucket (sub-hour bookings and
///   whole-multiple-of-24h spans alias to an empty range; they must not be
///   silently read as "no hours" or "all hours")
pub fn validated_hour_range(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<(u32, u32)> {
    if end <= start {
        return Err(EngineError::invalid_range(format!(
            "end time {end} is not after start time {start}"
        )));
    }
    let (start_hour, end_hour) = hour_range(start, end);
    if start_hour == end_hour {
        return Err(EngineError::invalid_range(
            "booking starts and ends in the same hour bucket, not representable on the hour grid",
        ));
    }
    Ok((start_hour, end_hour))
}

/// Hours occupied by a booking within the business window.
///
/// `start_hour <= end_hour` occupies exactly `[start_hour, end_hour)`.
/// Otherwise the span wraps past midnight and occupies
/// `[start_hour, close_hour) ∪ [open_hour, end_hour)`: a 22:00-02:00 shift
/// in a 0-24 business occupies {22, 23, 0, 1}.
pub fn occupied_hours(
    open_hour: u32,
    close_hour: u32,
    start_hour: u32,
    end_hour: u32,
) -> BTreeSet<u32> {
    let mut hours = BTreeSet::new();
    if start_hour <= end_hour {
        hours.extend(start_hour..end_hour);
    } else {
        hours.extend(start_hour..close_hour);
        hours.extend(open_hour..end_hour);
    }
    hours
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn non_wrapping_span_is_half_open() {
        for (start, end) in [(9u32, 12u32), (0, 1), (0, 24), (23, 24)] {
            let hours = occupied_hours(0, 24, start, end);
            let expected: BTreeSet<u32> = (start..end).collect();
            assert_eq!(hours, expected, "range {start}..{end}");
        }
    }

    #[test]
    fn wraparound_crosses_midnight() {
        let hours = occupied_hours(0, 24, 22, 2);
        let expected: BTreeSet<u32> = [22, 23, 0, 1].into_iter().collect();
        assert_eq!(hours, expected);
    }

    #[test]
    fn wraparound_respects_business_window() {
        // 8-22 business, shift 20:00 -> 10:00: evening block then morning block
        let hours = occupied_hours(8, 22, 20, 10);
        let expected: BTreeSet<u32> = [20, 21, 8, 9].into_iter().collect();
        assert_eq!(hours, expected);
    }

    #[test]
    fn hour_range_extracts_local_hours() {
        let (s, e) = hour_range(dt("2025-03-01 22:15:00"), dt("2025-03-02 02:45:00"));
        assert_eq!((s, e), (22, 2));
    }

    #[test]
    fn validated_range_accepts_overnight_span() {
        let range = validated_hour_range(dt("2025-03-01 22:00:00"), dt("2025-03-02 02:00:00"));
        assert_eq!(range.unwrap(), (22, 2));
    }

    #[test]
    fn validated_range_accepts_multi_day_subscription_span() {
        // Month-long shift running daily 14:00-16:00
        let range = validated_hour_range(dt("2025-02-01 14:00:00"), dt("2025-02-28 16:00:00"));
        assert_eq!(range.unwrap(), (14, 16));
    }

    #[test]
    fn validated_range_rejects_end_before_start() {
        let err = validated_hour_range(dt("2025-03-01 12:00:00"), dt("2025-03-01 12:00:00"))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_range");
    }

    #[test]
    fn validated_range_rejects_full_day_alias() {
        // Exactly 24h: same hour bucket at both ends, must not alias to
        // "no hours" or "all hours"
        let err = validated_hour_range(dt("2025-03-01 10:00:00"), dt("2025-03-02 10:00:00"))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_range");
    }

    #[test]
    fn validated_range_rejects_sub_hour_same_bucket() {
        let err = validated_hour_range(dt("2025-03-01 10:15:00"), dt("2025-03-01 10:45:00"))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_range");
    }
}
