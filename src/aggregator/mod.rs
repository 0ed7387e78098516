//! Aggregation of worker snapshots into per-snapshot statistics.
//!
//! This module transforms a snapshot dataset into:
//! - Reward totals and state counts per snapshot
//! - Optional sampled per-worker traces
//! - Pool-restricted datasets for the per-pool breakdown

pub mod bundle;
pub mod filter;
pub mod sampler;
pub mod stats;

// Re-export main types and functions
pub use bundle::{Cell, Series, StatisticBundle};
pub use filter::{filter_by_subset, worker_set};
pub use sampler::sample_workers;
pub use stats::aggregate;
