//! Flatten a sheet into header + rows, ready for serialization.

use super::assembler::Sheet;
use crate::aggregator::bundle::Cell;
use crate::utils::error::SheetError;

/// Row-major view of a sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub fields: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Convert a sheet into rows
///
/// **Public** - last step before writing the CSV
///
/// The row count comes from the first column and fields keep the sheet's
/// insertion order.
///
/// # Errors
/// * `SheetError::EmptySheet` - sheet has no columns
/// * `SheetError::ColumnLengthMismatch` - a column's length differs from the first
pub fn to_rows(sheet: &Sheet) -> Result<Table, SheetError> {
    let mut columns = sheet.columns();
    let n = columns
        .next()
        .map(|(_, values)| values.len())
        .ok_or(SheetError::EmptySheet)?;

    if let Some((name, values)) = columns.find(|(_, values)| values.len() != n) {
        return Err(SheetError::ColumnLengthMismatch {
            column: name.to_string(),
            expected: n,
            found: values.len(),
        });
    }

    let rows = (0..n)
        .map(|i| sheet.columns().map(|(_, values)| values[i].clone()).collect())
        .collect();

    Ok(Table {
        fields: sheet.fields(),
        rows,
    })
}
