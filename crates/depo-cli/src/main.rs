//! Depo CLI - Command-line interface for deposit valuation.
//!
//! # Usage
//!
//! ```bash
//! # Value stored deposit records
//! depo value deposits.json --as-of 2024-06-30
//!
//! # Project an ad-hoc deposit to maturity
//! depo project --principal 10000 --rate 7.5 --start 2024-01-15 --maturity 2026-01-15
//!
//! # Annualised yield of an observed growth
//! depo apy --principal 1000 --final 1210 --years 2
//!
//! # Future value of a recurring monthly deposit
//! depo recurring --monthly 500 --rate 6 --months 24
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so json/csv output stays parseable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Value(args) => commands::value::execute(args, format)?,
        Commands::Project(args) => commands::project::execute(args, format)?,
        Commands::Apy(args) => commands::apy::execute(args, format)?,
        Commands::Recurring(args) => commands::recurring::execute(args, format)?,
    }

    Ok(())
}
