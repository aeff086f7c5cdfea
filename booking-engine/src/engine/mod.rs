//! Scheduling engine
//!
//! Orchestrates the booking workflows over the repository traits: creation
//! with conflict checks, window projection for the seat grid, renewal into a
//! new subscription range, removal with the deactivation cascade, leave
//! validation, and the orphan reconciliation sweep.
//!
//! Every multi-step workflow is a sequential chain of dependent operations
//! for one customer; steps that allocate IDs or touch the same customer
//! document are never issued concurrently. There is no compensating
//! rollback: a store failure mid-workflow halts the chain and leaves state
//! as each workflow documents.

mod booking;
mod reconcile;
mod removal;
mod renewal;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use shared::models::{Business, Customer, LeaveRequest, Shift};
use shared::{EngineError, EngineResult};

use crate::config::Config;
use crate::db::{BusinessRepository, CustomerRepository, IdAllocator, ShiftRepository};
use crate::grid;
use crate::subscription;
use crate::utils::time;

/// The scheduling engine, generic over its store collaborators
pub struct SchedulingEngine {
    businesses: Arc<dyn BusinessRepository>,
    customers: Arc<dyn CustomerRepository>,
    shifts: Arc<dyn ShiftRepository>,
    ids: Arc<dyn IdAllocator>,
    config: Config,
}

impl SchedulingEngine {
    pub fn new(
        businesses: Arc<dyn BusinessRepository>,
        customers: Arc<dyn CustomerRepository>,
        shifts: Arc<dyn ShiftRepository>,
        ids: Arc<dyn IdAllocator>,
        config: Config,
    ) -> Self {
        Self {
            businesses,
            customers,
            shifts,
            ids,
            config,
        }
    }

    /// Engine over a single store implementing every collaborator trait
    pub fn with_store(store: Arc<crate::db::MemoryStore>, config: Config) -> Self {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            config,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ========== Shared lookups ==========

    pub(crate) async fn load_business(&self, id: &str) -> EngineResult<Business> {
        self.businesses
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(format!("business {id}")))
    }

    pub(crate) async fn load_customer(&self, id: &str) -> EngineResult<Customer> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(format!("customer {id}")))
    }

    // ========== Window projection ==========

    /// Shifts relevant to a viewing window: active, half-open interval
    /// overlap with `[window_start, window_end)`. The window decides
    /// inclusion only; it never truncates a shift's own hour range.
    pub async fn shifts_in_window(
        &self,
        business_id: &str,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> EngineResult<Vec<Shift>> {
        if window_end <= window_start {
            return Err(EngineError::invalid_range(format!(
                "window end {window_end} is not after window start {window_start}"
            )));
        }
        Ok(self
            .shifts
            .find_active_in_window(business_id, window_start, window_end)
            .await?)
    }

    /// Shifts in the configured default window starting at `from` date
    pub async fn upcoming_shifts(
        &self,
        business_id: &str,
        from: NaiveDate,
    ) -> EngineResult<Vec<Shift>> {
        let window_start = time::day_start(from);
        let window_end =
            window_start + chrono::Duration::days(i64::from(self.config.default_window_days));
        self.shifts_in_window(business_id, window_start, window_end).await
    }

    /// Per-seat occupied-hour sets for grid rendering.
    ///
    /// Each included shift projects its *own* instants onto the hour grid.
    /// `exclude_customer` drops that customer's shifts from the result so
    /// they can view or extend their own slot without seeing it as taken.
    pub async fn seat_occupancy(
        &self,
        business_id: &str,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
        exclude_customer: Option<&str>,
    ) -> EngineResult<HashMap<u16, BTreeSet<u32>>> {
        let business = self.load_business(business_id).await?;
        let shifts = self
            .shifts_in_window(business_id, window_start, window_end)
            .await?;

        let mut occupancy: HashMap<u16, BTreeSet<u32>> = HashMap::new();
        for shift in &shifts {
            if exclude_customer == Some(shift.customer_id.as_str()) {
                continue;
            }
            let Some(seat) = shift.seat.number() else {
                continue; // unallocated bookings hold no grid cells
            };
            let (start_hour, end_hour) = grid::hour_range(shift.start_time, shift.end_time);
            let hours = grid::occupied_hours(
                business.open_hour,
                business.close_hour,
                start_hour,
                end_hour,
            );
            occupancy.entry(seat).or_default().extend(hours);
        }
        Ok(occupancy)
    }

    // ========== Leave validation ==========

    /// Validate a leave request against the customer's subscription
    /// coverage envelope
    pub async fn validate_leave_request(&self, request: &LeaveRequest) -> EngineResult<()> {
        let customer = self.load_customer(&request.customer_id).await?;
        subscription::validate_within_subscription(
            &customer.subscription_start_dates,
            &customer.subscription_end_dates,
            request.start_date,
            request.end_date,
        )
    }
}
