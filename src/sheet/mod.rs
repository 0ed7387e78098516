//! Sheet assembly and row export.
//!
//! Bundles from the full dataset and from each pool are merged into one
//! column-keyed sheet, then flattened into a header plus rows.

pub mod assembler;
pub mod table;

pub use assembler::{add_to_sheet, Sheet};
pub use table::{to_rows, Table};
