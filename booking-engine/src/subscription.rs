//! Subscription window validation
//!
//! A proposed date range (typically a leave request) must fall inside the
//! customer's paid-for coverage. The check takes the *outer envelope* of all
//! recorded periods, `min(start_dates)` to `max(end_dates)`, not the union
//! of possibly-disjoint intervals: a request landing in a gap between two
//! non-contiguous periods still passes. Long-standing billing behavior,
//! kept as-is deliberately.

use chrono::NaiveDate;
use shared::{EngineError, EngineResult};

/// Validate `[request_start, request_end]` against the envelope of the
/// recorded subscription periods.
pub fn validate_within_subscription(
    start_dates: &[NaiveDate],
    end_dates: &[NaiveDate],
    request_start: NaiveDate,
    request_end: NaiveDate,
) -> EngineResult<()> {
    if request_end < request_start {
        return Err(EngineError::invalid_range(format!(
            "end date {request_end} is before start date {request_start}"
        )));
    }

    let min_start = start_dates.iter().min().copied().ok_or_else(|| {
        EngineError::subscription_window("customer has no recorded subscription periods")
    })?;
    let max_end = end_dates.iter().max().copied().ok_or_else(|| {
        EngineError::subscription_window("customer has no recorded subscription periods")
    })?;

    if request_start < min_start || request_end > max_end {
        return Err(EngineError::subscription_window(format!(
            "range {request_start}..{request_end} outside subscription coverage {min_start}..{max_end}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn range_inside_single_period_is_valid() {
        let starts = vec![d("2025-01-01")];
        let ends = vec![d("2025-01-31")];
        assert!(
            validate_within_subscription(&starts, &ends, d("2025-01-05"), d("2025-01-10")).is_ok()
        );
    }

    #[test]
    fn range_outside_envelope_is_rejected() {
        let starts = vec![d("2025-01-01")];
        let ends = vec![d("2025-01-31")];
        let err =
            validate_within_subscription(&starts, &ends, d("2025-01-20"), d("2025-02-05"))
                .unwrap_err();
        assert_eq!(err.kind(), "subscription_window_violation");
    }

    #[test]
    fn request_inside_gap_between_periods_is_accepted() {
        // Envelope policy: Jan1-Jan10 and Feb1-Feb10 cover Jan20-Jan25 even
        // though no period actually contains it.
        let starts = vec![d("2025-01-01"), d("2025-02-01")];
        let ends = vec![d("2025-01-10"), d("2025-02-10")];
        assert!(
            validate_within_subscription(&starts, &ends, d("2025-01-20"), d("2025-01-25")).is_ok()
        );
    }

    #[test]
    fn no_recorded_periods_is_a_violation() {
        let err = validate_within_subscription(&[], &[], d("2025-01-01"), d("2025-01-02"))
            .unwrap_err();
        assert_eq!(err.kind(), "subscription_window_violation");
    }

    #[test]
    fn inverted_request_is_invalid_range() {
        let starts = vec![d("2025-01-01")];
        let ends = vec![d("2025-01-31")];
        let err = validate_within_subscription(&starts, &ends, d("2025-01-10"), d("2025-01-05"))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_range");
    }
}
