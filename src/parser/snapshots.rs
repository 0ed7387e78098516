//! Loaders for the snapshot dump and the pool-worker map.
//!
//! Both files are read fully into memory. Any I/O or JSON failure is
//! fatal and returned to the caller unchanged.

use super::schema::{Dataset, PoolWorkers};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a snapshot dump (JSON array of snapshots)
///
/// **Public** - main entry point for dataset loading
///
/// # Errors
/// * `ParseError::Io` - file missing or unreadable
/// * `ParseError::Json` - not a valid snapshot array
pub fn load_snapshots(input_path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading snapshots from: {}", input_path.display());

    let file = File::open(input_path)?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;

    info!(
        "Loaded {} snapshots ({} worker records)",
        dataset.len(),
        dataset.iter().map(|s| s.frame.len()).sum::<usize>()
    );

    Ok(dataset)
}

/// Load a pool-worker map (JSON object: pool id -> worker ids)
///
/// **Public** - used when a pool breakdown is requested
pub fn load_pool_workers(input_path: impl AsRef<Path>) -> Result<PoolWorkers, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading pool workers from: {}", input_path.display());

    let file = File::open(input_path)?;
    let pools: PoolWorkers = serde_json::from_reader(BufReader::new(file))?;

    info!("Loaded {} pools", pools.len());

    Ok(pools)
}

/// Pools in report order
///
/// Integer-like ids come first in ascending numeric order. Every other id
/// keeps its position from the pool-worker file.
pub fn ordered_pool_ids(pools: &PoolWorkers) -> Vec<(&str, &[String])> {
    let mut ordered: Vec<(&str, &[String])> = pools.iter().collect();
    // sort_by is stable: non-numeric ids stay in file order
    ordered.sort_by(|(a, _), (b, _)| match (pool_index(a), pool_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    ordered
}

/// Canonical non-negative integer id ("7" yes, "07" and "-1" no)
///
/// **Private** - helper for ordered_pool_ids
fn pool_index(id: &str) -> Option<u64> {
    let n: u64 = id.parse().ok()?;
    (n.to_string() == id).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ids(pools: &PoolWorkers) -> Vec<&str> {
        ordered_pool_ids(pools).into_iter().map(|(id, _)| id).collect()
    }

    #[test]
    fn test_ordered_pool_ids() {
        let mut pools = PoolWorkers::new();
        for id in ["10", "2", "abc", "07", "1"] {
            pools.insert(id, Vec::new());
        }

        assert_eq!(ids(&pools), vec!["1", "2", "10", "abc", "07"]);
    }

    #[test]
    fn test_ordered_pool_ids_keeps_file_order_for_names() {
        let pools: PoolWorkers =
            serde_json::from_str(r#"{"zeta": [], "alpha": [], "3": []}"#).unwrap();

        assert_eq!(ids(&pools), vec!["3", "zeta", "alpha"]);
    }

    #[test]
    fn test_load_pool_workers() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"7": ["w1", "w2"], "3": []}}"#).unwrap();

        let pools = load_pool_workers(file.path()).unwrap();
        assert_eq!(pools.len(), 2);
        assert_eq!(
            pools.get("7"),
            Some(&["w1".to_string(), "w2".to_string()][..])
        );
    }

    #[test]
    fn test_load_snapshots_missing_file() {
        let result = load_snapshots("/nonexistent/snapshots.json");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_load_snapshots_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let result = load_snapshots(file.path());
        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}
