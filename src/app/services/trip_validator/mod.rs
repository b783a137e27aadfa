//! Record validation for raw trip records
//!
//! This module inspects one raw record at a time, derives its numeric
//! identifier and geographic features, and classifies it as accepted or
//! rejected with exactly one reason code.
//!
//! # Architecture
//!
//! - [`validator`] - The `TripValidator` with the fixed check order and the
//!   batch-scoped seen-identifier set
//! - [`id_extract`] - Numeric key extraction from free-form id strings
//! - [`geo`] - Haversine distance, pairing policy and bounding-box tests
//! - [`stats`] - Per-reason rejection counters for the batch
//!
//! # Check Order
//!
//! Checks run in a fixed order and the first hard failure wins: missing id,
//! duplicate id, id format, datetime presence/format, coordinate parsing,
//! duration, distance computation, speed plausibility. The outside-of-region
//! check runs last and is advisory: it logs a rejection entry but does not
//! exclude the record. See [`crate::app::models::Verdict`].

pub mod geo;
pub mod id_extract;
pub mod stats;
pub mod validator;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use id_extract::extract_numeric_id;
pub use stats::ValidationStats;
pub use validator::{TripValidator, speed_is_unrealistic};
