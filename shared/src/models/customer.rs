//! Customer Model
//!
//! Carries the denormalized current-assignment summary as parallel arrays:
//! index *i* across `current_shift_ids` / `current_seats` /
//! `current_shift_starts` / `current_shift_ends` describes one logical
//! assignment. The arrays are only ever mutated through the lock-step
//! helpers below so they can never drift out of alignment.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Seat;

/// Customer entity with embedded assignment summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub business_id: String,
    pub name: String,
    /// Must be false whenever `current_shift_ids` is empty
    pub active: bool,

    // === Denormalized assignment summary (parallel arrays) ===
    pub current_shift_ids: Vec<String>,
    pub current_seats: Vec<Seat>,
    pub current_shift_starts: Vec<NaiveDateTime>,
    pub current_shift_ends: Vec<NaiveDateTime>,
    pub current_payment_rate: Option<Decimal>,
    pub last_payment_date: Option<NaiveDate>,

    // === Subscription coverage, one pair appended per renewal/purchase ===
    pub subscription_start_dates: Vec<NaiveDate>,
    pub subscription_end_dates: Vec<NaiveDate>,
}

/// Typed view of one summary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub shift_id: String,
    pub seat: Seat,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl Customer {
    /// New customer with an empty summary
    pub fn new(id: impl Into<String>, business_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            business_id: business_id.into(),
            name: name.into(),
            active: false,
            current_shift_ids: Vec::new(),
            current_seats: Vec::new(),
            current_shift_starts: Vec::new(),
            current_shift_ends: Vec::new(),
            current_payment_rate: None,
            last_payment_date: None,
            subscription_start_dates: Vec::new(),
            subscription_end_dates: Vec::new(),
        }
    }

    pub fn assignment_count(&self) -> usize {
        self.current_shift_ids.len()
    }

    /// All four arrays have equal length
    pub fn summary_consistent(&self) -> bool {
        let n = self.current_shift_ids.len();
        self.current_seats.len() == n
            && self.current_shift_starts.len() == n
            && self.current_shift_ends.len() == n
    }

    pub fn index_of_shift(&self, shift_id: &str) -> Option<usize> {
        self.current_shift_ids.iter().position(|id| id == shift_id)
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        (0..self.assignment_count())
            .map(|i| Assignment {
                shift_id: self.current_shift_ids[i].clone(),
                seat: self.current_seats[i],
                start_time: self.current_shift_starts[i],
                end_time: self.current_shift_ends[i],
            })
            .collect()
    }

    /// Append one entry to every array
    pub fn push_assignment(&mut self, entry: Assignment) {
        self.current_shift_ids.push(entry.shift_id);
        self.current_seats.push(entry.seat);
        self.current_shift_starts.push(entry.start_time);
        self.current_shift_ends.push(entry.end_time);
    }

    /// Full replacement of the summary (renewal step 5)
    pub fn replace_assignments(&mut self, entries: Vec<Assignment>) {
        self.current_shift_ids.clear();
        self.current_seats.clear();
        self.current_shift_starts.clear();
        self.current_shift_ends.clear();
        for entry in entries {
            self.push_assignment(entry);
        }
    }

    /// Remove index `i` from every array in lock-step
    pub fn remove_assignment_at(&mut self, i: usize) -> Assignment {
        Assignment {
            shift_id: self.current_shift_ids.remove(i),
            seat: self.current_seats.remove(i),
            start_time: self.current_shift_starts.remove(i),
            end_time: self.current_shift_ends.remove(i),
        }
    }

    pub fn clear_assignments(&mut self) {
        self.current_shift_ids.clear();
        self.current_seats.clear();
        self.current_shift_starts.clear();
        self.current_shift_ends.clear();
    }

    /// Record one paid-for coverage period
    pub fn push_subscription_period(&mut self, start: NaiveDate, end: NaiveDate) {
        self.subscription_start_dates.push(start);
        self.subscription_end_dates.push(end);
    }
}

/// Renewal request: extend current shifts into a new date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewalRequest {
    pub customer_id: String,
    pub renew_start: NaiveDate,
    /// Must be >= `renew_start`
    pub renew_end: NaiveDate,
    pub payment_rate: Decimal,
    pub payment_date: NaiveDate,
    pub created_by: String,
}

/// Leave request, validated against the customer's subscription coverage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub customer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn entry(id: &str, seat: u16) -> Assignment {
        Assignment {
            shift_id: id.to_string(),
            seat: Seat::Number(seat),
            start_time: dt("2025-01-01 14:00:00"),
            end_time: dt("2025-01-01 16:00:00"),
        }
    }

    #[test]
    fn arrays_stay_parallel_through_push_and_remove() {
        let mut customer = Customer::new("m1", "b1", "Ada");
        customer.push_assignment(entry("s1", 1));
        customer.push_assignment(entry("s2", 2));
        customer.push_assignment(entry("s3", 3));
        assert!(customer.summary_consistent());

        let removed = customer.remove_assignment_at(1);
        assert_eq!(removed.shift_id, "s2");
        assert!(customer.summary_consistent());
        assert_eq!(customer.current_shift_ids, vec!["s1", "s3"]);
        assert_eq!(
            customer.current_seats,
            vec![Seat::Number(1), Seat::Number(3)]
        );
    }

    #[test]
    fn replace_assignments_is_full_replacement() {
        let mut customer = Customer::new("m1", "b1", "Ada");
        customer.push_assignment(entry("s1", 1));
        customer.replace_assignments(vec![entry("s9", 5)]);
        assert_eq!(customer.current_shift_ids, vec!["s9"]);
        assert!(customer.summary_consistent());
    }

    #[test]
    fn subscription_periods_append_in_pairs() {
        let mut customer = Customer::new("m1", "b1", "Ada");
        customer.push_subscription_period(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        );
        assert_eq!(customer.subscription_start_dates.len(), 1);
        assert_eq!(customer.subscription_end_dates.len(), 1);
    }
}
