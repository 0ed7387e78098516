//! Output writers for analysis reports.
//!
//! This module handles writing the assembled table to disk as CSV.

pub mod csv;

// Re-export main functions
pub use self::csv::{table_to_csv_string, validate_output_path, write_csv};
