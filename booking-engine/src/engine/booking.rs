//! Booking creation workflow
//!
//! Validate range and seat, run the conflict policy for the seat kind,
//! allocate the next sequential shift ID, persist the shift, then append it
//! to the customer's summary arrays. A store failure between shift creation
//! and the summary append leaves an orphaned active shift; the
//! reconciliation sweep surfaces those for operator review.

use shared::models::{Assignment, BookingRequest, Customer, Seat, Shift, ShiftCreate};
use shared::{EngineError, EngineResult};

use crate::{grid, overlap};

use super::SchedulingEngine;

impl SchedulingEngine {
    /// Create a booking for a numbered seat or an unallocated slot.
    ///
    /// Updates the summary's payment fields but records no subscription
    /// coverage: coverage periods are appended exclusively by
    /// [`SchedulingEngine::renew_customer`], which also serves as the
    /// initial-purchase workflow (with no active shifts it is a
    /// payment-and-coverage-only update). Callers register a purchase
    /// through it before or after booking seats.
    pub async fn create_booking(&self, request: BookingRequest) -> EngineResult<Shift> {
        let business = self.load_business(&request.business_id).await?;
        let mut customer = self.load_customer(&request.customer_id).await?;

        match request.seat {
            Seat::Number(seat) => {
                // Only seat bookings are projected onto the hour grid, so
                // only they carry the hour-bucket length restriction
                let (start_hour, end_hour) =
                    grid::validated_hour_range(request.start_time, request.end_time)?;
                if !business.seat_in_bounds(seat) {
                    return Err(EngineError::SeatOutOfBounds {
                        seat,
                        max_seats: business.max_seats,
                    });
                }
                // Conflict check over the full requested span, not a single day
                let occupancy = self
                    .seat_occupancy(
                        &request.business_id,
                        request.start_time,
                        request.end_time,
                        Some(&request.customer_id),
                    )
                    .await
                    .map_err(fail_closed)?;
                let occupied = occupancy.get(&seat).cloned().unwrap_or_default();
                let candidate = grid::occupied_hours(
                    business.open_hour,
                    business.close_hour,
                    start_hour,
                    end_hour,
                );
                if overlap::seat_conflict(&occupied, &candidate) {
                    return Err(EngineError::conflict(format!(
                        "continuous time slot not available on seat {seat}"
                    )));
                }
            }
            Seat::Unallocated => {
                // Unallocated bookings never touch the grid; any positive
                // span is bookable, sub-hour included
                if request.end_time <= request.start_time {
                    return Err(EngineError::invalid_range(format!(
                        "end time {} is not after start time {}",
                        request.end_time, request.start_time
                    )));
                }
                let existing = self
                    .shifts_for_unallocated_check(&request.customer_id)
                    .await?;
                if overlap::unallocated_conflict(&existing, request.start_time, request.end_time) {
                    return Err(EngineError::conflict(
                        "customer already has an unallocated booking in this time range",
                    ));
                }
            }
        }

        let id = self
            .ids
            .next_id(&request.business_id, &self.config.shift_id_prefix)
            .await?;
        let shift = self
            .shifts
            .create(
                id,
                ShiftCreate {
                    business_id: request.business_id,
                    customer_id: request.customer_id,
                    seat: request.seat,
                    start_time: request.start_time,
                    end_time: request.end_time,
                    payment_rate: request.payment_rate,
                    created_by: request.created_by,
                },
            )
            .await?;

        self.append_to_summary(&mut customer, &shift, request.payment_date)
            .await?;

        tracing::info!(
            shift_id = %shift.id,
            customer_id = %shift.customer_id,
            seat = ?shift.seat,
            "booking created"
        );
        Ok(shift)
    }

    /// Same-customer active unallocated bookings, failing closed on store
    /// error: an unverifiable slot is reported as a conflict, never as free.
    async fn shifts_for_unallocated_check(&self, customer_id: &str) -> EngineResult<Vec<Shift>> {
        match self.shifts.find_active_unallocated(customer_id).await {
            Ok(existing) => Ok(existing),
            Err(err) => {
                tracing::warn!(
                    customer_id = %customer_id,
                    error = %err,
                    "unallocated booking lookup failed, failing closed"
                );
                Err(EngineError::conflict(
                    "existing bookings could not be verified, try again",
                ))
            }
        }
    }

    async fn append_to_summary(
        &self,
        customer: &mut Customer,
        shift: &Shift,
        payment_date: chrono::NaiveDate,
    ) -> EngineResult<()> {
        customer.push_assignment(Assignment {
            shift_id: shift.id.clone(),
            seat: shift.seat,
            start_time: shift.start_time,
            end_time: shift.end_time,
        });
        customer.current_payment_rate = Some(shift.payment_rate);
        customer.last_payment_date = Some(payment_date);
        customer.active = true;

        if let Err(err) = self.customers.update(customer).await {
            tracing::error!(
                shift_id = %shift.id,
                customer_id = %customer.id,
                error = %err,
                "summary append failed after shift creation, shift is orphaned until reconciliation"
            );
            return Err(err.into());
        }
        Ok(())
    }
}

/// Seat-grid occupancy reads fail closed: any store error during the
/// conflict check denies the booking instead of risking a double-booked seat.
fn fail_closed(err: EngineError) -> EngineError {
    match err {
        EngineError::StoreUnavailable(msg) => {
            tracing::warn!(error = %msg, "seat occupancy lookup failed, failing closed");
            EngineError::conflict("existing bookings could not be verified, try again")
        }
        other => other,
    }
}
