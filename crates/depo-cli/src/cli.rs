//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ApyArgs, ProjectArgs, RecurringArgs, ValueArgs};

/// Depo - Deposit valuation CLI
#[derive(Parser)]
#[command(name = "depo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value deposit records from a JSON or YAML file
    Value(ValueArgs),

    /// Value and project a simple or compound deposit given on the command line
    Project(ProjectArgs),

    /// Annual percentage yield from principal, final value and years
    Apy(ApyArgs),

    /// Future value of a fixed monthly deposit
    Recurring(RecurringArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
