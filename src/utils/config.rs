//! Configuration and constants for the CLI.

/// Default location of the snapshot dump
pub const DEFAULT_SNAPSHOTS_PATH: &str = "./tmp/snapshots.json";

/// Default location of the CSV report
pub const DEFAULT_OUTPUT_PATH: &str = "./tmp/analysis.csv";

/// Number of workers traced when sampling is enabled
pub const DEFAULT_SAMPLE_SIZE: usize = 1;

// Worker states that get their own counters. Everything else is "other".
pub const STATE_MINING_IDLE: &str = "MiningIdle";
pub const STATE_MINING_UNRESPONSIVE: &str = "MiningUnresponsive";

// Column prefixes: "full-*" for the whole dataset, "p{id}-*" per pool
pub const FULL_PREFIX: &str = "full";
pub const POOL_PREFIX: &str = "p";

/// Leading sheet columns
pub const BLOCKNUM_COLUMN: &str = "blocknum";
pub const DATE_COLUMN: &str = "date";

/// chrono format for the `date` column (e.g. "03-14 09:05")
pub const DATE_FORMAT: &str = "%m-%d %H:%M";
