//! Command-line parsing for the panel analytics CLI.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the analytics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ChartKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "careops",
    version,
    about = "Healthcare-operations panel analytics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Project the demo lab panel into a chart shape and print it.
    Labs(LabsArgs),
    /// Build the 5x5 risk matrix from the built-in catalog and print the heat map.
    Risk(RiskArgs),
    /// Compute a claim-recovery projection.
    Roi(RoiArgs),
}

/// Options for the lab panel.
#[derive(Debug, Parser, Clone)]
pub struct LabsArgs {
    /// Chart shape to project into.
    #[arg(long, value_enum, default_value_t = ChartKind::Bar)]
    pub chart: ChartKind,

    /// Random seed for demo-value jitter (deterministic per seed).
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Relative jitter applied to demo values (0 disables, must be < 1).
    #[arg(long, default_value_t = 0.0)]
    pub jitter: f64,

    /// Export the projected panel to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the risk matrix.
#[derive(Debug, Parser, Clone)]
pub struct RiskArgs {
    /// Select one cell and print its bucketed items (format: `P,I`, each 1-5).
    #[arg(long, value_name = "P,I")]
    pub select: Option<String>,

    /// Export the matrix to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the recovery projection.
#[derive(Debug, Parser, Clone)]
pub struct RoiArgs {
    /// Monetary amount flagged for recovery.
    #[arg(long, default_value_t = 120_000.0)]
    pub flagged: f64,

    /// Expected recovery rate in percent.
    #[arg(long, default_value_t = 72.0)]
    pub rate: f64,

    /// Cost of the recovery effort.
    #[arg(long, default_value_t = 5_000.0)]
    pub cost: f64,

    /// Average days to recover a claim.
    #[arg(long, default_value_t = 15.0)]
    pub days: f64,

    /// Export the projection to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
