//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod inspect;

// Re-export main command functions
pub use analyze::{build_sheet, execute_analyze, validate_args, AnalyzeArgs};
pub use inspect::{execute_inspect, summarize, DatasetSummary};
