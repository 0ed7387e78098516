//! Worker Snapshot Analyzer
//!
//! Turns a series of mining worker snapshots into per-block statistics,
//! for the whole worker set and broken down by pool, and writes them as
//! one wide CSV table.
//!
//! This crate provides the core implementation for the
//! `worker-snapshot` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! worker-snapshot analyze --snapshots ./tmp/snapshots.json \
//!     --pool-workers ./tmp/pool-workers.json --output ./tmp/analysis.csv
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod sheet;
pub mod utils;
