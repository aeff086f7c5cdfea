//! Shift Model
//!
//! A shift is one time-bounded seat booking. Shifts are immutable once
//! created except for `status`; renewal never mutates in place, it creates
//! replacements and deactivates the originals.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shift status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl Default for ShiftStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Seat assignment - a numbered seat or the unallocated sentinel
///
/// Unallocated bookings have no physical seat contention; they only
/// conflict with the same customer's other unallocated bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "number")]
pub enum Seat {
    #[serde(rename = "SEAT")]
    Number(u16),
    #[serde(rename = "UNALLOCATED")]
    Unallocated,
}

impl Seat {
    pub fn is_unallocated(&self) -> bool {
        matches!(self, Self::Unallocated)
    }

    pub fn number(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Unallocated => None,
        }
    }
}

/// Shift record - one booking of a seat for a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    /// Sequential, business+prefix scoped
    pub id: String,
    pub business_id: String,
    pub customer_id: String,
    pub seat: Seat,
    /// Absolute instant, local clock
    pub start_time: NaiveDateTime,
    /// Strictly after `start_time`
    pub end_time: NaiveDateTime,
    /// Agreed rate; opaque to the engine
    pub payment_rate: Decimal,
    pub status: ShiftStatus,
    /// Staff account that created the booking
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

/// Create shift payload (persisted by the repository, which assigns
/// `status = ACTIVE` and stamps `created_at`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCreate {
    pub business_id: String,
    pub customer_id: String,
    pub seat: Seat,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub payment_rate: Decimal,
    pub created_by: String,
}

/// Booking request from the caller (UI seat-grid tap or unallocated form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub business_id: String,
    pub customer_id: String,
    pub seat: Seat,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub payment_rate: Decimal,
    /// Date the payment was taken, recorded on the customer summary
    pub payment_date: chrono::NaiveDate,
    pub created_by: String,
}
