//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use depo_core::math::round_money;

use crate::cli::OutputFormat;

/// Prints a metric list in the requested format.
///
/// `minimal_key` names the metric printed alone in minimal mode.
pub fn print_key_values(
    title: &str,
    rows: &[KeyValue],
    format: OutputFormat,
    minimal_key: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(title);
            print_table(rows)
        }
        OutputFormat::Json => {
            let output: serde_json::Map<String, serde_json::Value> = rows
                .iter()
                .filter(|r| !r.key.is_empty())
                .map(|r| (r.key.clone(), serde_json::Value::String(r.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        OutputFormat::Csv => {
            let rows: Vec<&KeyValue> = rows.iter().filter(|r| !r.key.is_empty()).collect();
            print_csv(&rows)
        }
        OutputFormat::Minimal => {
            if let Some(r) = rows.iter().find(|r| r.key == minimal_key) {
                println!("{}", r.value);
            }
            Ok(())
        }
    }
}

/// Prints data as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Formats a money amount to cents.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

/// Formats a percentage figure (already scaled by 100).
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a money amount.
    pub fn from_money(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, format_money(value))
    }

    /// Creates a key-value pair from a percentage figure.
    pub fn from_percent(key: impl Into<String>, value: Decimal) -> Self {
        Self::new(key, format_percent(value))
    }

    /// Blank row separating inputs from results in table output.
    pub fn separator() -> Self {
        Self::new("", "")
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
