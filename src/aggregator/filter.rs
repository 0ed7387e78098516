//! Restrict a dataset to a subset of workers (one pool).

use crate::parser::schema::{Dataset, Snapshot};
use log::debug;
use std::collections::HashSet;

/// Keep only the records of `worker_ids` in every snapshot
///
/// **Public** - used once per pool before aggregation
///
/// Snapshot count, order, block numbers and timestamps are unchanged. An
/// empty id set yields the same snapshots with empty frames.
pub fn filter_by_subset(dataset: &[Snapshot], worker_ids: &HashSet<String>) -> Dataset {
    debug!(
        "Filtering {} snapshots down to {} workers",
        dataset.len(),
        worker_ids.len()
    );

    dataset
        .iter()
        .map(|snapshot| Snapshot {
            blocknum: snapshot.blocknum,
            timestamp: snapshot.timestamp,
            frame: snapshot
                .frame
                .iter()
                .filter(|record| worker_ids.contains(&record.worker))
                .cloned()
                .collect(),
        })
        .collect()
}

/// Build the lookup set for `filter_by_subset` from a pool's worker list
pub fn worker_set(workers: &[String]) -> HashSet<String> {
    workers.iter().cloned().collect()
}
