//! Business Model

use serde::{Deserialize, Serialize};

/// Business entity - daily operating window and seat inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    /// Opening hour of the daily window, 0..=23
    pub open_hour: u32,
    /// Closing hour, 1..=24 (24 means "until midnight"); `open_hour < close_hour`
    pub close_hour: u32,
    /// Seats are numbered 1..=max_seats
    pub max_seats: u16,
}

impl Business {
    /// Whether a seat number lies in 1..=max_seats
    pub fn seat_in_bounds(&self, seat: u16) -> bool {
        (1..=self.max_seats).contains(&seat)
    }
}
