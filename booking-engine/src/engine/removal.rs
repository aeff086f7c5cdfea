//! Removal / deactivation cascade
//!
//! Removing one assignment takes its index out of every summary array in
//! lock-step, marks the shift inactive, then cascades: a customer whose
//! summary just emptied is deactivated. Manual customer deactivation runs
//! the same cascade over all current shifts as a batch.

use shared::models::ShiftStatus;
use shared::{EngineError, EngineResult};

use super::SchedulingEngine;

impl SchedulingEngine {
    /// Remove one assignment by shift id.
    ///
    /// Re-running for an already-removed shift id returns `NotFound`, not a
    /// silent success.
    pub async fn remove_assignment(&self, customer_id: &str, shift_id: &str) -> EngineResult<()> {
        let mut customer = self.load_customer(customer_id).await?;
        let index = customer.index_of_shift(shift_id).ok_or_else(|| {
            EngineError::not_found(format!(
                "shift {shift_id} not in customer {customer_id} summary"
            ))
        })?;

        customer.remove_assignment_at(index);
        self.shifts
            .set_status(shift_id, ShiftStatus::Inactive)
            .await?;

        if customer.current_shift_ids.is_empty() {
            customer.active = false;
            tracing::info!(
                customer_id = %customer.id,
                "last assignment removed, customer deactivated"
            );
        }
        self.customers.update(&customer).await?;

        tracing::info!(shift_id = %shift_id, customer_id = %customer_id, "assignment removed");
        Ok(())
    }

    /// Manual deactivation: retire every current shift as a batch and clear
    /// the summary
    pub async fn deactivate_customer(&self, customer_id: &str) -> EngineResult<()> {
        let mut customer = self.load_customer(customer_id).await?;

        if !customer.current_shift_ids.is_empty() {
            self.shifts
                .set_status_batch(&customer.current_shift_ids, ShiftStatus::Inactive)
                .await?;
        }
        customer.clear_assignments();
        customer.active = false;
        self.customers.update(&customer).await?;

        tracing::info!(customer_id = %customer_id, "customer deactivated");
        Ok(())
    }
}
