//! Snapshot input schema and loaders.
//!
//! This module handles:
//! - Defining the snapshot / worker record schema
//! - Loading the snapshot dump and pool-worker map from disk
//! - Ordering pool ids for the report

pub mod schema;
pub mod snapshots;

// Re-export main types
pub use schema::{Dataset, PoolWorkers, Snapshot, WorkerRecord, WorkerState};
pub use snapshots::{load_pool_workers, load_snapshots, ordered_pool_ids};
