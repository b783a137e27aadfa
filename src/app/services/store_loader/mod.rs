//! Persistent store loading
//!
//! Bulk-writes the ordered, accepted trips into the SQLite `trips` table,
//! replacing any prior contents: drop-if-exists, recreate with the fixed
//! schema, then insert every trip in the order given (ascending numeric id,
//! guaranteed upstream by the sorter). Commits are batched every
//! `commit_interval` rows as a durability/performance tradeoff, with a final
//! commit covering the remainder.
//!
//! There is deliberately no transactional guarantee spanning the
//! drop/create/insert sequence: a crash mid-load can leave an empty or
//! partially populated table. The batch pipeline treats that run as failed.

pub mod loader;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use loader::{LoadStats, StoreLoader, round2};
