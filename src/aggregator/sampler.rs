//! Per-worker traces for a few anchor miners.
//!
//! Positions within a frame shift from block to block, so the traced
//! workers are anchored on miner identity: the miners of the first `n`
//! records of the first snapshot. Every later snapshot is matched against
//! those miners and sorted by miner before indexing.

use super::bundle::{Cell, Series, StatisticBundle};
use crate::parser::schema::{Snapshot, WorkerRecord};
use log::{debug, warn};

/// Build `v-{i}`, `totalReward-{i}` and `pPerc-{i}` series for `i in 0..n`
///
/// **Public** - invoked by `aggregate` when sampling is enabled
///
/// Missing records (fewer matches than `i + 1` in a snapshot) yield `0`.
/// `pPerc` is `pInstant / pInit` without a zero guard, so a zero baseline
/// produces NaN or infinity.
pub fn sample_workers(dataset: &[Snapshot], n: usize) -> StatisticBundle {
    let anchors = anchor_miners(dataset, n);
    debug!("Sampling {} workers anchored on miners {:?}", n, anchors);

    let sampled: Vec<Vec<&WorkerRecord>> = dataset
        .iter()
        .map(|snapshot| {
            let mut matched: Vec<&WorkerRecord> = snapshot
                .frame
                .iter()
                .filter(|record| anchors.contains(&record.miner.as_str()))
                .collect();
            // sort_by is stable: equal miners keep frame order
            matched.sort_by(|a, b| a.miner.cmp(&b.miner));
            matched
        })
        .collect();

    let zero_baselines = sampled
        .iter()
        .flat_map(|records| records.iter().take(n))
        .filter(|record| record.p_init == 0.0)
        .count();
    if zero_baselines > 0 {
        warn!(
            "{} sampled records have pInit == 0, pPerc will be non-finite",
            zero_baselines
        );
    }

    let mut bundle = StatisticBundle::new();
    for i in 0..n {
        bundle.insert(format!("v-{}", i), column(&sampled, i, |r| r.v));
        bundle.insert(
            format!("totalReward-{}", i),
            column(&sampled, i, |r| r.total_reward),
        );
        bundle.insert(
            format!("pPerc-{}", i),
            column(&sampled, i, |r| r.p_instant / r.p_init),
        );
    }
    bundle
}

/// Miners of the first `n` records of the first snapshot, in frame order
fn anchor_miners(dataset: &[Snapshot], n: usize) -> Vec<&str> {
    dataset
        .first()
        .map(|first| {
            first
                .frame
                .iter()
                .take(n)
                .map(|record| record.miner.as_str())
                .collect()
        })
        .unwrap_or_default()
}

fn column(
    sampled: &[Vec<&WorkerRecord>],
    index: usize,
    value: impl Fn(&WorkerRecord) -> f64,
) -> Series {
    sampled
        .iter()
        .map(|records| Cell::Float(records.get(index).map_or(0.0, |&r| value(r))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::WorkerState;

    fn record(worker: &str, miner: &str, v: f64) -> WorkerRecord {
        WorkerRecord {
            worker: worker.to_string(),
            miner: miner.to_string(),
            v,
            total_reward: v * 2.0,
            state: WorkerState::MiningIdle,
            p_instant: 1.0,
            p_init: 1.0,
        }
    }

    fn snapshot(blocknum: u64, frame: Vec<WorkerRecord>) -> Snapshot {
        Snapshot { blocknum, timestamp: 0.0, frame }
    }

    #[test]
    fn test_anchor_miners_from_first_snapshot() {
        let dataset = vec![
            snapshot(1, vec![record("w1", "m2", 1.0), record("w2", "m1", 2.0)]),
            snapshot(2, vec![record("w3", "m9", 3.0)]),
        ];
        assert_eq!(anchor_miners(&dataset, 1), vec!["m2"]);
        assert_eq!(anchor_miners(&dataset, 5), vec!["m2", "m1"]);
        assert!(anchor_miners(&[], 1).is_empty());
    }

    #[test]
    fn test_sorted_by_miner_across_snapshots() {
        // Anchors m2 then m1; later frames reorder them, output is by miner
        let dataset = vec![
            snapshot(1, vec![record("w1", "m2", 1.0), record("w2", "m1", 2.0)]),
            snapshot(2, vec![record("w2", "m1", 20.0), record("w1", "m2", 10.0)]),
        ];
        let bundle = sample_workers(&dataset, 2);

        assert_eq!(
            bundle.get("v-0"),
            Some(&vec![Cell::Float(2.0), Cell::Float(20.0)])
        );
        assert_eq!(
            bundle.get("v-1"),
            Some(&vec![Cell::Float(1.0), Cell::Float(10.0)])
        );
    }

    #[test]
    fn test_equal_miners_keep_frame_order() {
        let dataset = vec![snapshot(
            1,
            vec![record("w1", "m1", 1.0), record("w2", "m1", 2.0)],
        )];
        let bundle = sample_workers(&dataset, 2);

        assert_eq!(bundle.get("v-0"), Some(&vec![Cell::Float(1.0)]));
        assert_eq!(bundle.get("v-1"), Some(&vec![Cell::Float(2.0)]));
    }
}
