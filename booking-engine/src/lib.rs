//! Seat & time-slot scheduling engine
//!
//! Manages time-bounded seat bookings ("shifts") inside a business's daily
//! operating window for customers on rolling-date subscriptions. The core is
//! interval reasoning on a cyclic hour-of-day grid per seat: conflict
//! detection, subscription-window validation, and the renewal workflow that
//! extends active shifts into a new date range while retiring the old ones.
//!
//! # Module structure
//!
//! ```text
//! booking-engine/src/
//! ├── config.rs      # env-driven configuration
//! ├── grid.rs        # hour-of-day projection, wraparound rule
//! ├── overlap.rs     # seat-scoped and time-scoped conflict policies
//! ├── subscription.rs# subscription window (envelope) validation
//! ├── db/            # repository traits + in-memory reference store
//! ├── engine/        # booking / renewal / removal / reconcile workflows
//! └── utils/         # logging, time helpers
//! ```
//!
//! Persistence, authentication and rendering live outside this crate; the
//! engine consumes repository traits and deals only in instants, dates and
//! hour integers.

pub mod config;
pub mod db;
pub mod engine;
pub mod grid;
pub mod overlap;
pub mod subscription;
pub mod utils;

// Re-export public types
pub use config::Config;
pub use db::{
    BusinessRepository, CustomerRepository, IdAllocator, MemoryStore, ShiftRepository, StoreError,
    StoreResult,
};
pub use engine::SchedulingEngine;
pub use shared::{EngineError, EngineResult};
