//! Renewal (extension) workflow
//!
//! Extends a customer's active shifts into a new subscription date range
//! without changing time-of-day or seat. Order matters: replacements are
//! created first, originals deactivated after, so a reader observing
//! mid-workflow sees both generations active rather than a customer with no
//! booking at all. The chain halts at the first failing step; there is no
//! compensating rollback.

use shared::models::{Assignment, RenewalRequest, Shift, ShiftCreate, ShiftStatus};
use shared::{EngineError, EngineResult};

use crate::utils::time;

use super::SchedulingEngine;

impl SchedulingEngine {
    /// Renew a customer into `[renew_start, renew_end]`.
    ///
    /// Returns the replacement shifts (empty when the customer had no
    /// active shifts and only payment/subscription fields were updated).
    pub async fn renew_customer(&self, request: RenewalRequest) -> EngineResult<Vec<Shift>> {
        if request.renew_end < request.renew_start {
            return Err(EngineError::invalid_range(format!(
                "renewal end {} is before start {}",
                request.renew_end, request.renew_start
            )));
        }

        let mut customer = self.load_customer(&request.customer_id).await?;

        // No shifts to renew: payment-only update
        if customer.current_shift_ids.is_empty() {
            customer.push_subscription_period(request.renew_start, request.renew_end);
            customer.current_payment_rate = Some(request.payment_rate);
            customer.last_payment_date = Some(request.payment_date);
            self.customers.update(&customer).await?;
            tracing::info!(
                customer_id = %customer.id,
                "renewal with no active shifts, payment fields updated"
            );
            return Ok(Vec::new());
        }

        let originals = self
            .shifts
            .find_by_ids(&customer.current_shift_ids)
            .await?;
        if originals.len() != customer.current_shift_ids.len() {
            return Err(EngineError::not_found(
                "customer summary references shifts missing from the store",
            ));
        }

        // Sequential creation: ID allocation per (business, prefix) must not race
        let mut replacements = Vec::with_capacity(originals.len());
        for original in &originals {
            let id = self
                .ids
                .next_id(&original.business_id, &self.config.shift_id_prefix)
                .await?;
            let replacement = self
                .shifts
                .create(
                    id,
                    ShiftCreate {
                        business_id: original.business_id.clone(),
                        customer_id: original.customer_id.clone(),
                        seat: original.seat,
                        start_time: time::on_date(request.renew_start, original.start_time),
                        end_time: time::on_date(request.renew_end, original.end_time),
                        payment_rate: request.payment_rate,
                        created_by: request.created_by.clone(),
                    },
                )
                .await?;
            replacements.push(replacement);
        }

        // All replacements exist; retire the originals as one batch
        let old_ids = customer.current_shift_ids.clone();
        self.shifts
            .set_status_batch(&old_ids, ShiftStatus::Inactive)
            .await?;

        // Full summary replacement, never an append
        customer.replace_assignments(
            replacements
                .iter()
                .map(|shift| Assignment {
                    shift_id: shift.id.clone(),
                    seat: shift.seat,
                    start_time: shift.start_time,
                    end_time: shift.end_time,
                })
                .collect(),
        );
        customer.push_subscription_period(request.renew_start, request.renew_end);
        customer.current_payment_rate = Some(request.payment_rate);
        customer.last_payment_date = Some(request.payment_date);
        customer.active = true;
        self.customers.update(&customer).await?;

        tracing::info!(
            customer_id = %customer.id,
            renewed = replacements.len(),
            renew_start = %request.renew_start,
            renew_end = %request.renew_end,
            "renewal complete"
        );
        Ok(replacements)
    }
}
