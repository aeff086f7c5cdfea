//! Time helpers
//!
//! Date parsing and date/time-of-day composition. The engine works in the
//! business's local clock; timezone conversion happens in the caller.

use chrono::{NaiveDate, NaiveDateTime};
use shared::{EngineError, EngineResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| EngineError::invalid_range(format!("Invalid date format: {date}")))
}

/// Place an instant's time-of-day onto another calendar date. Renewal uses
/// this to keep a shift's hour/minute/second while replacing the date.
pub fn on_date(date: NaiveDate, instant: NaiveDateTime) -> NaiveDateTime {
    date.and_time(instant.time())
}

/// Start of day (00:00:00)
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// Exclusive end of day: next day 00:00:00, for `< end` window semantics
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    day_start(date.succ_opt().unwrap_or(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_date_preserves_time_of_day() {
        let original =
            NaiveDateTime::parse_from_str("2025-01-01 14:30:15", "%Y-%m-%d %H:%M:%S").unwrap();
        let moved = on_date(parse_date("2025-02-01").unwrap(), original);
        assert_eq!(moved.to_string(), "2025-02-01 14:30:15");
    }

    #[test]
    fn day_bounds_are_half_open() {
        let date = parse_date("2025-01-06").unwrap();
        assert_eq!(day_start(date).to_string(), "2025-01-06 00:00:00");
        assert_eq!(day_end(date).to_string(), "2025-01-07 00:00:00");
    }

    #[test]
    fn bad_date_is_invalid_range() {
        assert_eq!(parse_date("06/01/2025").unwrap_err().kind(), "invalid_range");
    }
}
