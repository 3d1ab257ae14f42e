//! Recurring deposit command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use depo_valuation::recurring_deposit_future_value;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_key_values, KeyValue};

/// Arguments for the recurring command.
#[derive(Args, Debug)]
pub struct RecurringArgs {
    /// Amount deposited at the end of every month
    #[arg(short, long)]
    pub monthly: Decimal,

    /// Annual rate (as percentage, e.g., 6.0 for 6%), compounded monthly
    #[arg(short, long)]
    pub rate: Decimal,

    /// Number of monthly deposits
    #[arg(long)]
    pub months: u32,
}

/// Execute the recurring command.
pub fn execute(args: RecurringArgs, format: OutputFormat) -> Result<()> {
    if args.monthly < Decimal::ZERO {
        return Err(CliError::InvalidArgument(format!(
            "monthly amount must not be negative, got {}",
            args.monthly
        ))
        .into());
    }

    let future_value = recurring_deposit_future_value(args.monthly, args.rate, args.months);
    let contributed = args.monthly * Decimal::from(args.months);

    let results = vec![
        KeyValue::from_money("Monthly Deposit", args.monthly),
        KeyValue::from_percent("Rate", args.rate),
        KeyValue::new("Months", args.months.to_string()),
        KeyValue::separator(),
        KeyValue::from_money("Total Deposited", contributed),
        KeyValue::from_money("Interest Earned", future_value - contributed),
        KeyValue::from_money("Future Value", future_value),
    ];

    print_key_values("Recurring Deposit", &results, format, "Future Value")
}
