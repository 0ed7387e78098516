//! Worker Snapshot Analyzer CLI
//!
//! Aggregates mining worker snapshots into per-block statistics,
//! optionally broken down by pool, and writes them as CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use worker_snapshot_analyzer::commands::{execute_analyze, execute_inspect, validate_args, AnalyzeArgs};
use worker_snapshot_analyzer::utils::config::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SAMPLE_SIZE, DEFAULT_SNAPSHOTS_PATH,
};

/// Worker Snapshot Analyzer - pool statistics from worker snapshots
#[derive(Parser, Debug)]
#[command(name = "worker-snapshot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate snapshots into a CSV report
    Analyze {
        /// The snapshots to analyze
        #[arg(long, default_value = DEFAULT_SNAPSHOTS_PATH)]
        snapshots: PathBuf,

        /// Pool worker JSON file; when given the report has a per-pool breakdown
        #[arg(long)]
        pool_workers: Option<PathBuf>,

        /// Path of the output CSV file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Sample "v, totalReward, pPerc" of the first worker(s) in each breakdown
        #[arg(long)]
        sample_worker: bool,

        /// Number of workers to sample when --sample-worker is set
        #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample_size: usize,

        /// Render dates in UTC instead of local time
        #[arg(long)]
        utc: bool,
    },

    /// Print a summary of a snapshot file
    Inspect {
        /// Snapshot file to inspect
        #[arg(long, default_value = DEFAULT_SNAPSHOTS_PATH)]
        snapshots: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            snapshots,
            pool_workers,
            output,
            sample_worker,
            sample_size,
            utc,
        } => {
            let args = AnalyzeArgs {
                snapshots,
                pool_workers,
                output,
                sample: sample_worker.then_some(sample_size),
                utc,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Inspect { snapshots } => {
            execute_inspect(&snapshots)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Worker Snapshot Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Per-block and per-pool statistics from mining worker snapshots.");
}
