//! APY command implementation.
//!
//! Annualises an observed growth from principal to final value.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use depo_valuation::calculate_apy;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_key_values, KeyValue};

/// Arguments for the apy command.
#[derive(Args, Debug)]
pub struct ApyArgs {
    /// Amount originally deposited
    #[arg(short, long)]
    pub principal: Decimal,

    /// Value at the end of the period
    #[arg(short = 'F', long = "final")]
    pub final_value: Decimal,

    /// Length of the period in years (fractions allowed)
    #[arg(short, long)]
    pub years: Decimal,
}

/// Execute the apy command.
pub fn execute(args: ApyArgs, format: OutputFormat) -> Result<()> {
    if args.principal <= Decimal::ZERO {
        return Err(CliError::InvalidArgument(format!(
            "principal must be positive, got {}",
            args.principal
        ))
        .into());
    }

    let apy = calculate_apy(args.principal, args.final_value, args.years);

    let results = vec![
        KeyValue::from_money("Principal", args.principal),
        KeyValue::from_money("Final Value", args.final_value),
        KeyValue::new("Years", args.years.normalize().to_string()),
        KeyValue::separator(),
        KeyValue::from_percent("APY", apy),
    ];

    print_key_values("Annual Percentage Yield", &results, format, "APY")
}
