//! CSV report writer.
//!
//! Writes a `Table` as comma-separated text: a header line, then one line
//! per snapshot. Lines end with CRLF and the last line has no terminator.

use crate::aggregator::bundle::Cell;
use crate::sheet::Table;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const DELIMITER: char = ',';
const NEWLINE: &str = "\r\n";

/// Write a table to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
pub fn write_csv(table: &Table, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing CSV to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(table_to_csv_string(table).as_bytes())?;
    writer.flush()?;

    info!(
        "CSV written successfully ({} rows, {} columns)",
        table.rows.len(),
        table.fields.len()
    );

    Ok(())
}

/// Render a table as CSV text
///
/// **Public** - useful for tests and stdout output
pub fn table_to_csv_string(table: &Table) -> String {
    let header = join_line(table.fields.iter());
    let lines = table
        .rows
        .iter()
        .map(|row| join_line(row.iter().map(Cell::to_string)));

    std::iter::once(header)
        .chain(lines)
        .collect::<Vec<_>>()
        .join(NEWLINE)
}

/// Validate that output path is writable
///
/// **Public** - also used by argument validation
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn join_line<S: AsRef<str>>(fields: impl Iterator<Item = S>) -> String {
    fields
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Quote a field if it contains the delimiter, a quote, or a line break
fn escape_field(field: &str) -> String {
    if field.contains([DELIMITER, '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_table() -> Table {
        Table {
            fields: vec!["blocknum".into(), "date".into(), "full-pPerc-0".into()],
            rows: vec![
                vec![Cell::Int(100), Cell::Text("09-01 08:05".into()), Cell::Float(0.5)],
                vec![Cell::Int(101), Cell::Text("09-01 08:06".into()), Cell::Float(f64::NAN)],
            ],
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_table_to_csv_string() {
        let csv = table_to_csv_string(&create_test_table());
        assert_eq!(
            csv,
            "blocknum,date,full-pPerc-0\r\n100,09-01 08:05,0.5\r\n101,09-01 08:06,NaN"
        );
    }

    #[test]
    fn test_write_csv_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("analysis.csv");

        write_csv(&create_test_table(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("blocknum,date,full-pPerc-0\r\n"));
    }

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path(Path::new("")).is_err());

        let dir = TempDir::new().unwrap();
        assert!(validate_output_path(dir.path()).is_err());
        assert!(validate_output_path(&dir.path().join("out.csv")).is_ok());
    }
}
