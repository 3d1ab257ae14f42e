//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DepoError;

/// How often interest is capitalised into the deposit balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    /// Daily compounding (365x per year)
    Daily,
    /// Monthly compounding (12x per year)
    #[default]
    Monthly,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Annual compounding (1x per year)
    Annually,
}

impl CompoundingFrequency {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Annually => 1,
        }
    }

    /// Returns true for monthly compounding.
    #[must_use]
    pub fn is_monthly(&self) -> bool {
        matches!(self, CompoundingFrequency::Monthly)
    }

    /// Returns the lowercase tag used in stored records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Annually => "annually",
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompoundingFrequency::Daily => "Daily",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Annually => "Annually",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CompoundingFrequency {
    type Err = DepoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "365" => Ok(CompoundingFrequency::Daily),
            "monthly" | "12" => Ok(CompoundingFrequency::Monthly),
            "quarterly" | "4" => Ok(CompoundingFrequency::Quarterly),
            "annually" | "annual" | "yearly" | "1" => Ok(CompoundingFrequency::Annually),
            other => Err(DepoError::invalid_contract(format!(
                "unknown compounding frequency: {other}"
            ))),
        }
    }
}
