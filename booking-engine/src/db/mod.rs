//! Storage abstraction
//!
//! The engine consumes an abstract document store through these traits.
//! Every call is atomic per document; multi-document transactions are never
//! assumed, which is why the workflows in [`crate::engine`] are ordered the
//! way they are. Status and window filters are part of the query methods so
//! implementations push them down instead of scanning full history.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::EngineError;
use shared::models::{Business, Customer, Shift, ShiftCreate, ShiftStatus};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => EngineError::NotFound(msg),
            StoreError::Unavailable(msg) => EngineError::StoreUnavailable(msg),
        }
    }
}

/// Sequential human-readable ID allocation.
///
/// Monotonic per (business, prefix) pair when called serially. Not safe
/// under concurrent callers for the same pair; workflows that allocate run
/// as sequential chains, never fan-out.
#[async_trait]
pub trait IdAllocator: Send + Sync {
    async fn next_id(&self, business_id: &str, prefix: &str) -> StoreResult<String>;
}

/// Shift record persistence
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// Persist a new shift with `status = ACTIVE` under the allocated id
    async fn create(&self, id: String, data: ShiftCreate) -> StoreResult<Shift>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Shift>>;

    /// Fetch a batch by id; missing ids are simply absent from the result
    async fn find_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Shift>>;

    /// Active shifts for a business overlapping `[window_start, window_end)`
    async fn find_active_in_window(
        &self,
        business_id: &str,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> StoreResult<Vec<Shift>>;

    /// The customer's active unallocated bookings
    async fn find_active_unallocated(&self, customer_id: &str) -> StoreResult<Vec<Shift>>;

    /// All active shifts for a business (reconciliation sweep)
    async fn find_active_by_business(&self, business_id: &str) -> StoreResult<Vec<Shift>>;

    async fn set_status(&self, id: &str, status: ShiftStatus) -> StoreResult<()>;

    /// Batch status change, one logical step in the workflows. Per-document
    /// atomic only.
    async fn set_status_batch(&self, ids: &[String], status: ShiftStatus) -> StoreResult<()>;
}

/// Customer persistence
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Customer>>;

    /// All customers of a business (reconciliation sweep)
    async fn find_by_business(&self, business_id: &str) -> StoreResult<Vec<Customer>>;

    /// Persist the customer document, summary arrays included
    async fn update(&self, customer: &Customer) -> StoreResult<()>;
}

/// Business lookup
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Business>>;
}
