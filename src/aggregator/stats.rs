//! Per-snapshot statistics for one dataset.
//!
//! Each statistic is computed independently for every snapshot and
//! collected in snapshot order. Empty frames are not an error: sums and
//! counts fall back to 0.

use super::bundle::{Cell, Series, StatisticBundle};
use super::sampler::sample_workers;
use crate::parser::schema::{Snapshot, WorkerRecord, WorkerState};
use log::debug;

/// Aggregate a dataset into its statistic bundle
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `dataset` - Snapshots, full or pool-filtered
/// * `sample` - `Some(n)` to also trace the first `n` anchor workers
///
/// # Returns
/// Series `totalRewards`, `mining`, `unresponsive`, `total`, followed by the
/// sampled series when enabled. Each has one entry per snapshot.
pub fn aggregate(dataset: &[Snapshot], sample: Option<usize>) -> StatisticBundle {
    debug!(
        "Aggregating {} snapshots (sampling: {:?})",
        dataset.len(),
        sample
    );

    let mut bundle = StatisticBundle::new();

    bundle.insert(
        "totalRewards",
        per_snapshot(dataset, |frame| {
            Cell::Float(frame.iter().map(|r| r.total_reward).sum())
        }),
    );
    bundle.insert(
        "mining",
        per_snapshot(dataset, |frame| {
            count_state(frame, &WorkerState::MiningIdle).into()
        }),
    );
    bundle.insert(
        "unresponsive",
        per_snapshot(dataset, |frame| {
            count_state(frame, &WorkerState::MiningUnresponsive).into()
        }),
    );
    bundle.insert("total", per_snapshot(dataset, |frame| frame.len().into()));

    if let Some(n) = sample {
        bundle.extend(sample_workers(dataset, n));
    }

    bundle
}

fn per_snapshot(dataset: &[Snapshot], stat: impl Fn(&[WorkerRecord]) -> Cell) -> Series {
    dataset.iter().map(|snapshot| stat(&snapshot.frame)).collect()
}

fn count_state(frame: &[WorkerRecord], state: &WorkerState) -> usize {
    frame.iter().filter(|r| r.state == *state).count()
}
