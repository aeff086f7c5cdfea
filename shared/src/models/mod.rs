//! Data models
//!
//! Shared between the engine and its callers. All IDs are human-readable
//! strings; shift IDs come from the sequential per-(business, prefix)
//! allocator. Instants are `NaiveDateTime` in the business's local clock;
//! timezone conversion is the caller's job.

pub mod business;
pub mod customer;
pub mod shift;

// Re-exports
pub use business::*;
pub use customer::*;
pub use shift::*;
