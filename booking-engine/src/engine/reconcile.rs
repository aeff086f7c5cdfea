//! Reconciliation sweep
//!
//! The workflows are not transactional: a store failure between shift
//! creation and the summary update leaves an active shift no summary
//! references. This sweep finds those records so an operator can resolve
//! them; it never mutates anything itself.

use std::collections::HashSet;

use shared::EngineResult;
use shared::models::Shift;

use super::SchedulingEngine;

impl SchedulingEngine {
    /// Active shifts of a business not referenced by any customer's
    /// summary arrays
    pub async fn find_orphaned_shifts(&self, business_id: &str) -> EngineResult<Vec<Shift>> {
        let active = self.shifts.find_active_by_business(business_id).await?;
        let customers = self.customers.find_by_business(business_id).await?;

        let referenced: HashSet<&str> = customers
            .iter()
            .flat_map(|c| c.current_shift_ids.iter().map(String::as_str))
            .collect();

        let orphans: Vec<Shift> = active
            .into_iter()
            .filter(|shift| !referenced.contains(shift.id.as_str()))
            .collect();

        if !orphans.is_empty() {
            tracing::warn!(
                business_id = %business_id,
                count = orphans.len(),
                "active shifts unreferenced by any customer summary, flag for operator review"
            );
        }
        Ok(orphans)
    }
}
