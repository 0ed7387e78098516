//! Utility modules for configuration, error handling, and date display.

pub mod config;
pub mod datetime;
pub mod error;

// Re-export commonly used error types for convenience
pub use error::{OutputError, ParseError, SheetError};
