//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the snapshot dump
//! 2. Loads the pool-worker map (if given)
//! 3. Aggregates the full dataset and every pool
//! 4. Assembles the sheet and flattens it to rows
//! 5. Writes the CSV report

use crate::aggregator::{aggregate, filter_by_subset, worker_set, Cell};
use crate::output::{validate_output_path, write_csv};
use crate::parser::{load_pool_workers, load_snapshots, ordered_pool_ids, PoolWorkers, Snapshot};
use crate::sheet::{add_to_sheet, to_rows, Sheet};
use crate::utils::config::{
    BLOCKNUM_COLUMN, DATE_COLUMN, DEFAULT_OUTPUT_PATH, DEFAULT_SNAPSHOTS_PATH, FULL_PREFIX, POOL_PREFIX,
};
use crate::utils::datetime::format_date;
use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone, Utc};
use log::{debug, info, warn};
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Snapshot dump to analyze
    pub snapshots: PathBuf,

    /// Pool-worker map for the per-pool breakdown (optional)
    pub pool_workers: Option<PathBuf>,

    /// Output path for the CSV report
    pub output: PathBuf,

    /// Number of anchor workers to trace, `None` disables sampling
    pub sample: Option<usize>,

    /// Render dates in UTC instead of local time
    pub utc: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            snapshots: PathBuf::from(DEFAULT_SNAPSHOTS_PATH),
            pool_workers: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sample: None,
            utc: false,
        }
    }
}

/// Validate analyze arguments before doing any work
///
/// **Public** - called by main.rs before execute_analyze
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if !args.snapshots.is_file() {
        bail!("Snapshot file not found: {}", args.snapshots.display());
    }

    if let Some(pool_workers) = &args.pool_workers {
        if !pool_workers.is_file() {
            bail!("Pool worker file not found: {}", pool_workers.display());
        }
    }

    if args.sample == Some(0) {
        bail!("Sample size must be at least 1");
    }

    validate_output_path(&args.output).context("Invalid output path")?;

    Ok(())
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Snapshot or pool-worker file missing or malformed
/// * Sheet columns of unequal length
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting analysis of: {}", args.snapshots.display());

    // Step 1: Load snapshots
    info!("Step 1/5: Loading snapshots...");
    let dataset = load_snapshots(&args.snapshots).with_context(|| {
        format!("Failed to load snapshots from {}", args.snapshots.display())
    })?;

    // Step 2: Load pool workers
    let pools = match &args.pool_workers {
        Some(path) => {
            info!("Step 2/5: Loading pool workers...");
            load_pool_workers(path)
                .with_context(|| format!("Failed to load pool workers from {}", path.display()))?
        }
        None => {
            info!("Step 2/5: Skipping pool breakdown (no pool worker file)");
            PoolWorkers::new()
        }
    };

    // Step 3: Aggregate
    info!(
        "Step 3/5: Aggregating full dataset and {} pools...",
        pools.len()
    );
    let sheet = if args.utc {
        build_sheet(&dataset, &pools, args.sample, &Utc)
    } else {
        build_sheet(&dataset, &pools, args.sample, &Local)
    };

    // Step 4: Flatten
    info!("Step 4/5: Flattening {} columns into rows...", sheet.len());
    let table = to_rows(&sheet).context("Failed to flatten sheet")?;

    // Step 5: Write
    info!("Step 5/5: Writing CSV...");
    write_csv(&table, &args.output).context("Failed to write CSV report")?;

    info!("✓ Report written to: {}", args.output.display());

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Assemble the full report sheet
///
/// **Public** - the whole pipeline minus file I/O
///
/// Columns are `blocknum`, `date`, every `full-*` series, then the
/// `p{id}-*` series of each pool in report order.
pub fn build_sheet<Tz>(
    dataset: &[Snapshot],
    pools: &PoolWorkers,
    sample: Option<usize>,
    tz: &Tz,
) -> Sheet
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut sheet = Sheet::new();

    sheet.insert(
        BLOCKNUM_COLUMN,
        dataset
            .iter()
            .map(|s| Cell::Int(s.blocknum as i64))
            .collect(),
    );
    sheet.insert(
        DATE_COLUMN,
        dataset
            .iter()
            .map(|s| Cell::Text(format_date(s.timestamp, tz)))
            .collect(),
    );

    add_to_sheet(&mut sheet, aggregate(dataset, sample), FULL_PREFIX);

    for (pool_id, pool_workers) in ordered_pool_ids(pools) {
        let workers = worker_set(pool_workers);
        let slice = filter_by_subset(dataset, &workers);

        let matched: usize = slice.iter().map(|s| s.frame.len()).sum();
        if matched == 0 {
            warn!(
                "Pool {} ({} workers) has no records in any snapshot",
                pool_id,
                workers.len()
            );
        }
        debug!("Pool {}: {} records across snapshots", pool_id, matched);

        add_to_sheet(
            &mut sheet,
            aggregate(&slice, sample),
            &format!("{}{}", POOL_PREFIX, pool_id),
        );
    }

    sheet
}
