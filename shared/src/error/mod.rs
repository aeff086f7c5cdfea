//! Unified error type for the scheduling engine
//!
//! Every terminal error is distinguishable by variant so the caller can
//! render an actionable message ("slot unavailable" vs. "select both dates"
//! vs. "service unreachable, retry"). Validation errors never partially
//! mutate state; `StoreUnavailable` mid-workflow may leave the documented
//! inconsistency window (see `SchedulingEngine::find_orphaned_shifts`).

use thiserror::Error;

/// Engine error taxonomy
#[derive(Debug, Error)]
pub enum EngineError {
    /// End not after start, or a span the hour-bucket model cannot represent
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Seat number outside 1..=max_seats
    #[error("Seat {seat} out of bounds (business has seats 1..={max_seats})")]
    SeatOutOfBounds { seat: u16, max_seats: u16 },

    /// Seat-scoped or time-scoped overlap with an existing booking
    #[error("Conflict detected: {0}")]
    ConflictDetected(String),

    /// Requested range falls outside the customer's subscription coverage
    #[error("Subscription window violation: {0}")]
    SubscriptionWindowViolation(String),

    /// Customer, shift or business missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Collaborator (document store / ID allocator) failure
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl EngineError {
    // ========== Convenient constructors ==========

    /// Create an InvalidRange error
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange(message.into())
    }

    /// Create a ConflictDetected error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictDetected(message.into())
    }

    /// Create a SubscriptionWindowViolation error
    pub fn subscription_window(message: impl Into<String>) -> Self {
        Self::SubscriptionWindowViolation(message.into())
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a StoreUnavailable error
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable(message.into())
    }

    // ========== Error inspection methods ==========

    /// Whether the caller can recover by re-prompting with corrected input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange(_)
                | Self::SeatOutOfBounds { .. }
                | Self::ConflictDetected(_)
                | Self::SubscriptionWindowViolation(_)
        )
    }

    /// Whether a plain retry may succeed (collaborator outage)
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    /// Stable kind string for callers that key messages off it
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRange(_) => "invalid_range",
            Self::SeatOutOfBounds { .. } => "seat_out_of_bounds",
            Self::ConflictDetected(_) => "conflict_detected",
            Self::SubscriptionWindowViolation(_) => "subscription_window_violation",
            Self::NotFound(_) => "not_found",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_not_retryable() {
        let err = EngineError::conflict("continuous time slot not available");
        assert!(err.is_validation());
        assert!(!err.is_retryable());

        let err = EngineError::store_unavailable("connection refused");
        assert!(!err.is_validation());
        assert!(err.is_retryable());
    }

    #[test]
    fn kind_strings_are_distinct() {
        let errors = [
            EngineError::invalid_range("x"),
            EngineError::SeatOutOfBounds {
                seat: 9,
                max_seats: 8,
            },
            EngineError::conflict("x"),
            EngineError::subscription_window("x"),
            EngineError::not_found("x"),
            EngineError::store_unavailable("x"),
        ];
        let kinds: std::collections::HashSet<_> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds.len(), errors.len());
    }
}
