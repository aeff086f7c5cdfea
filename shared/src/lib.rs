//! Shared types for the booking engine
//!
//! Domain models and the unified error type, used by the engine crate and by
//! any caller (API layer, CLI tooling) that talks to it. No engine logic
//! lives here.

pub mod error;
pub mod models;

// Re-exports
pub use error::{EngineError, EngineResult};
pub use serde::{Deserialize, Serialize};
