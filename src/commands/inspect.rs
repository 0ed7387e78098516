//! Inspect command: quick look at a snapshot dump before analyzing it.

use crate::parser::{load_snapshots, Snapshot};
use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Shape of a snapshot dump
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub snapshots: usize,
    pub first_block: Option<u64>,
    pub last_block: Option<u64>,
    pub largest_frame: usize,
    pub distinct_workers: usize,
    pub distinct_miners: usize,
    /// Worker count per state in the last snapshot
    pub last_states: BTreeMap<String, usize>,
}

/// Summarize a dataset
///
/// **Public** - also handy in tests
pub fn summarize(dataset: &[Snapshot]) -> DatasetSummary {
    let records = || dataset.iter().flat_map(|s| s.frame.iter());

    let mut last_states = BTreeMap::new();
    if let Some(last) = dataset.last() {
        for record in &last.frame {
            *last_states
                .entry(record.state.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    DatasetSummary {
        snapshots: dataset.len(),
        first_block: dataset.first().map(|s| s.blocknum),
        last_block: dataset.last().map(|s| s.blocknum),
        largest_frame: dataset.iter().map(|s| s.frame.len()).max().unwrap_or(0),
        distinct_workers: records()
            .map(|r| r.worker.as_str())
            .collect::<HashSet<_>>()
            .len(),
        distinct_miners: records()
            .map(|r| r.miner.as_str())
            .collect::<HashSet<_>>()
            .len(),
        last_states,
    }
}

/// Load a snapshot dump and print its summary
///
/// **Public** - entry point for the inspect command
pub fn execute_inspect(path: &Path) -> Result<()> {
    println!("Inspecting snapshots: {}", path.display());

    let dataset = load_snapshots(path)
        .with_context(|| format!("Failed to load snapshots from {}", path.display()))?;
    let summary = summarize(&dataset);

    println!("✓ Valid snapshot JSON");
    println!("  Snapshots:        {}", summary.snapshots);
    if let (Some(first), Some(last)) = (summary.first_block, summary.last_block) {
        println!("  Blocks:           {} .. {}", first, last);
    }
    println!("  Largest frame:    {}", summary.largest_frame);
    println!("  Distinct workers: {}", summary.distinct_workers);
    println!("  Distinct miners:  {}", summary.distinct_miners);

    if !summary.last_states.is_empty() {
        println!("  States at last snapshot:");
        for (state, count) in &summary.last_states {
            let label = if state.is_empty() { "<none>" } else { state.as_str() };
            println!("    {:<20} {}", label, count);
        }
    }

    Ok(())
}
