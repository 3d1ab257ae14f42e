//! Value command implementation.
//!
//! Reads stored deposit records, validates them and values each on one
//! evaluation date.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use depo_core::types::Date;
use depo_valuation::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::resolve_as_of;
use crate::error::{CliError, CliResult};
use crate::output::{format_money, format_percent, print_csv, print_header, print_json, print_table, print_warning};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// JSON or YAML file holding one deposit record or a list of them
    pub file: PathBuf,

    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, env = "DEPO_AS_OF")]
    pub as_of: Option<String>,

    /// Value records even if they fail validation
    #[arg(long)]
    pub skip_validation: bool,
}

/// Either shape a record file may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Many(Vec<DepositRecord>),
    One(DepositRecord),
}

impl RecordFile {
    fn into_records(self) -> Vec<DepositRecord> {
        match self {
            RecordFile::Many(records) => records,
            RecordFile::One(record) => vec![record],
        }
    }
}

/// One table or CSV row.
#[derive(Debug, Serialize, Tabled)]
struct ValuationRow {
    #[tabled(rename = "Deposit")]
    name: String,
    #[tabled(rename = "Type")]
    interest_type: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Current Value")]
    current_value: String,
    #[tabled(rename = "Interest")]
    accrued_interest: String,
    #[tabled(rename = "Elapsed")]
    elapsed: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "APY")]
    apy: String,
    #[tabled(rename = "At Maturity")]
    maturity_value: String,
}

/// Full JSON report for one deposit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValuationReport {
    name: String,
    interest_type: String,
    #[serde(flatten)]
    valuation: DepositValuation,
    duration: String,
    status: String,
    apy: Decimal,
}

impl ValuationReport {
    fn new(record: &DepositRecord, as_of: Date) -> Self {
        let contract = record.to_contract();
        let valuation = valuate(&contract, as_of);
        Self {
            name: record.label().to_string(),
            interest_type: contract.regime.name().to_string(),
            duration: format_duration(&valuation),
            status: classify_status(&valuation).to_string(),
            apy: valuation.apy(),
            valuation,
        }
    }

    fn row(&self) -> ValuationRow {
        ValuationRow {
            name: self.name.clone(),
            interest_type: self.interest_type.clone(),
            principal: format_money(self.valuation.principal),
            current_value: format_money(self.valuation.current_value),
            accrued_interest: format_money(self.valuation.accrued_interest),
            elapsed: self.duration.clone(),
            status: self.status.clone(),
            apy: format_percent(self.apy),
            maturity_value: self
                .valuation
                .projected_maturity_value
                .map_or_else(|| "-".to_string(), format_money),
        }
    }
}

/// Execute the value command.
pub fn execute(args: ValueArgs, format: OutputFormat) -> Result<()> {
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let records = load_records(&args.file)?;

    for record in &records {
        let errors = record.validate();
        if errors.is_empty() {
            continue;
        }
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        if args.skip_validation {
            print_warning(&format!("{}: {}", record.label(), messages.join("; ")));
        } else {
            return Err(CliError::Validation {
                name: record.label().to_string(),
                errors: messages,
            }
            .into());
        }
    }

    tracing::debug!(count = records.len(), %as_of, "valuing deposits");

    let reports: Vec<ValuationReport> = records
        .iter()
        .map(|record| ValuationReport::new(record, as_of))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!("Deposit Valuation as of {as_of}"));
            let rows: Vec<ValuationRow> = reports.iter().map(ValuationReport::row).collect();
            print_table(&rows)?;
        }
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Csv => {
            let rows: Vec<ValuationRow> = reports.iter().map(ValuationReport::row).collect();
            print_csv(&rows)?;
        }
        OutputFormat::Minimal => {
            for report in &reports {
                println!("{}", format_money(report.valuation.current_value));
            }
        }
    }

    Ok(())
}

/// Reads records from `path`, choosing the parser by extension.
fn load_records(path: &Path) -> CliResult<Vec<DepositRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let file: RecordFile = match extension.as_str() {
        "json" => serde_json::from_str(&contents)
            .map_err(|e| CliError::Serialization(format!("{}: {e}", path.display())))?,
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .map_err(|e| CliError::Serialization(format!("{}: {e}", path.display())))?,
        _ => return Err(CliError::UnsupportedFormat(path.display().to_string())),
    };

    Ok(file.into_records())
}
