//! Project command implementation.
//!
//! Values a deposit described entirely by flags and projects it to
//! maturity. Schedule-driven regimes need a record file; see `value`.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use depo_core::types::CompoundingFrequency;
use depo_valuation::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, resolve_as_of};
use crate::error::CliError;
use crate::output::{print_key_values, KeyValue};

/// Arguments for the project command.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Amount deposited
    #[arg(short, long)]
    pub principal: Decimal,

    /// Annual rate (as percentage, e.g., 7.5 for 7.5%)
    #[arg(short, long)]
    pub rate: Decimal,

    /// Start date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: Option<String>,

    /// Interest type: simple or compound
    #[arg(short = 't', long = "type", default_value = "compound")]
    pub interest_type: String,

    /// Compounding: daily, monthly, quarterly or annually
    #[arg(long, default_value = "monthly")]
    pub frequency: String,

    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, env = "DEPO_AS_OF")]
    pub as_of: Option<String>,
}

/// Execute the project command.
pub fn execute(args: ProjectArgs, format: OutputFormat) -> Result<()> {
    let interest_type = args.interest_type.trim().to_ascii_lowercase();
    if interest_type != "simple" && interest_type != "compound" {
        return Err(CliError::InvalidArgument(format!(
            "--type must be simple or compound, got '{}'",
            args.interest_type
        ))
        .into());
    }

    let frequency: CompoundingFrequency = args
        .frequency
        .parse()
        .map_err(|_| CliError::InvalidArgument(format!("unknown frequency '{}'", args.frequency)))?;

    let mut record = DepositRecord::new(args.principal, args.rate, parse_date(&args.start)?);
    record.maturity_date = args.maturity.as_deref().map(parse_date).transpose()?;
    record.compounding_frequency = Some(frequency.as_str().to_string());
    record.interest_type = Some(interest_type);

    let errors = record.validate();
    if !errors.is_empty() {
        return Err(CliError::Validation {
            name: record.label().to_string(),
            errors: errors.iter().map(ToString::to_string).collect(),
        }
        .into());
    }

    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let contract = record.to_contract();
    let valuation = valuate(&contract, as_of);

    let mut results = vec![
        KeyValue::from_money("Principal", contract.principal),
        KeyValue::new("Rate", format!("{}%", contract.annual_rate_percent.normalize())),
        KeyValue::new("Interest Type", contract.regime.to_string()),
        KeyValue::new("Compounding", contract.compounding_frequency.to_string()),
        KeyValue::new("Start", contract.start_date.to_string()),
        KeyValue::new(
            "Maturity",
            contract
                .maturity_date
                .map_or_else(|| "-".to_string(), |d| d.to_string()),
        ),
        KeyValue::new("As Of", as_of.to_string()),
        KeyValue::separator(),
        KeyValue::from_money("Current Value", valuation.current_value),
        KeyValue::from_money("Accrued Interest", valuation.accrued_interest),
        KeyValue::new("Elapsed", format_duration(&valuation)),
        KeyValue::new("Status", classify_status(&valuation).to_string()),
        KeyValue::from_percent("APY", valuation.apy()),
    ];
    if let Some(projected) = valuation.projected_maturity_value {
        results.push(KeyValue::from_money("Maturity Value", projected));
    }

    print_key_values("Deposit Projection", &results, format, "Current Value")
}
