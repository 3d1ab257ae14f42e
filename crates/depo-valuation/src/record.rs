//! Stored deposit records.
//!
//! [`DepositRecord`] is the flat shape a persistence layer keeps for a
//! deposit asset: a free-text interest type and three optional schedule
//! arrays. It converts into a [`DepositContract`] without failing; unknown
//! tags and missing schedules resolve to compounding. Run
//! [`Validate::validate`] first to surface those problems to a user.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use depo_core::types::{CompoundingFrequency, Date};

use crate::contract::{BalanceTier, DepositContract, InterestRegime, RateChange, RateStage};
use crate::validation::{Validate, ValidationError};

const KNOWN_TYPES: [&str; 5] = ["simple", "compound", "progressive", "variable", "tiered"];

/// A deposit as stored by a persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Amount deposited.
    pub principal: Decimal,
    /// Nominal annual rate, as a percentage.
    #[serde(alias = "interestRate")]
    pub annual_rate_percent: Decimal,
    /// Date interest starts to accrue.
    pub start_date: Date,
    /// Optional maturity date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<Date>,
    /// Frequency tag ("daily", "monthly", "quarterly", "annually").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compounding_frequency: Option<String>,
    /// Regime tag ("simple", "compound", "progressive", "variable", "tiered").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_type: Option<String>,
    /// Stages for progressive deposits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive_schedule: Option<Vec<RateStage>>,
    /// Rate changes for variable deposits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_schedule: Option<Vec<RateChange>>,
    /// Tiers for tiered deposits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiered_schedule: Option<Vec<BalanceTier>>,
}

impl DepositRecord {
    /// Creates a compound-interest record with no maturity.
    #[must_use]
    pub fn new(principal: Decimal, annual_rate_percent: Decimal, start_date: Date) -> Self {
        Self {
            name: None,
            principal,
            annual_rate_percent,
            start_date,
            maturity_date: None,
            compounding_frequency: None,
            interest_type: None,
            progressive_schedule: None,
            variable_schedule: None,
            tiered_schedule: None,
        }
    }

    /// Returns the display name, or a generic label.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("deposit")
    }

    /// Builds the contract this record describes.
    #[must_use]
    pub fn to_contract(&self) -> DepositContract {
        let mut contract =
            DepositContract::new(self.principal, self.annual_rate_percent, self.start_date)
                .with_compounding(self.frequency())
                .with_regime(self.regime());
        contract.maturity_date = self.maturity_date;
        contract
    }

    fn frequency(&self) -> CompoundingFrequency {
        match self.compounding_frequency.as_deref() {
            None => CompoundingFrequency::default(),
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                log::warn!("unknown compounding frequency {tag:?} on {}, using monthly", self.label());
                CompoundingFrequency::default()
            }),
        }
    }

    fn regime(&self) -> InterestRegime {
        let tag = self
            .interest_type
            .as_deref()
            .map_or_else(|| "compound".to_string(), |t| t.trim().to_ascii_lowercase());

        match tag.as_str() {
            "simple" => InterestRegime::Simple,
            "compound" => InterestRegime::Compound,
            "progressive" => InterestRegime::Progressive {
                stages: self.progressive_schedule.clone().unwrap_or_default(),
            },
            "variable" => InterestRegime::Variable {
                changes: self.variable_schedule.clone().unwrap_or_default(),
            },
            "tiered" => InterestRegime::Tiered {
                tiers: self.tiered_schedule.clone().unwrap_or_default(),
            },
            other => {
                log::warn!("unknown interest type {other:?} on {}, using compound", self.label());
                InterestRegime::Compound
            }
        }
    }
}

impl From<&DepositRecord> for DepositContract {
    fn from(record: &DepositRecord) -> Self {
        record.to_contract()
    }
}

impl Validate for DepositRecord {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.principal <= Decimal::ZERO {
            errors.push(ValidationError::with_rule(
                "principal",
                format!("must be positive, got {}", self.principal),
                "positive",
            ));
        }

        if self.annual_rate_percent < Decimal::ZERO
            || self.annual_rate_percent > Decimal::ONE_HUNDRED
        {
            errors.push(ValidationError::with_rule(
                "annualRatePercent",
                format!("must be between 0 and 100, got {}", self.annual_rate_percent),
                "range",
            ));
        }

        if let Some(maturity) = self.maturity_date {
            if maturity < self.start_date {
                errors.push(ValidationError::with_rule(
                    "maturityDate",
                    format!("{maturity} is before start date {}", self.start_date),
                    "ordering",
                ));
            }
        }

        if let Some(ref tag) = self.compounding_frequency {
            if tag.parse::<CompoundingFrequency>().is_err() {
                errors.push(ValidationError::new(
                    "compoundingFrequency",
                    format!("unknown frequency {tag:?}"),
                ));
            }
        }

        let interest_type = self
            .interest_type
            .as_deref()
            .map(|t| t.trim().to_ascii_lowercase());

        match interest_type.as_deref() {
            Some("progressive") => validate_stages(self.progressive_schedule.as_deref(), &mut errors),
            Some("variable") => validate_changes(self.variable_schedule.as_deref(), &mut errors),
            Some("tiered") => validate_tiers(self.tiered_schedule.as_deref(), &mut errors),
            Some(tag) if !KNOWN_TYPES.contains(&tag) => {
                errors.push(ValidationError::new(
                    "interestType",
                    format!("unknown interest type {tag:?}"),
                ));
            }
            _ => {}
        }

        errors
    }
}

fn validate_stages(stages: Option<&[RateStage]>, errors: &mut Vec<ValidationError>) {
    let field = "progressiveSchedule";
    let Some(stages) = stages.filter(|s| !s.is_empty()) else {
        errors.push(ValidationError::with_rule(field, "progressive deposits need at least one stage", "required"));
        return;
    };

    for (i, stage) in stages.iter().enumerate() {
        if stage.duration_months == 0 {
            errors.push(ValidationError::new(
                format!("{field}[{i}].durationMonths"),
                "must be at least one month",
            ));
        }
        if stage.rate_percent < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{field}[{i}].ratePercent"),
                "must not be negative",
            ));
        }
    }
}

fn validate_changes(changes: Option<&[RateChange]>, errors: &mut Vec<ValidationError>) {
    let field = "variableSchedule";
    let Some(changes) = changes.filter(|c| !c.is_empty()) else {
        errors.push(ValidationError::with_rule(field, "variable deposits need at least one rate change", "required"));
        return;
    };

    let mut seen = HashSet::new();
    for (i, change) in changes.iter().enumerate() {
        if !seen.insert(change.effective_date) {
            errors.push(ValidationError::with_rule(
                format!("{field}[{i}].effectiveDate"),
                format!("{} appears more than once", change.effective_date),
                "unique",
            ));
        }
        if change.rate_percent < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{field}[{i}].ratePercent"),
                "must not be negative",
            ));
        }
    }
}

fn validate_tiers(tiers: Option<&[BalanceTier]>, errors: &mut Vec<ValidationError>) {
    let field = "tieredSchedule";
    let Some(tiers) = tiers.filter(|t| !t.is_empty()) else {
        errors.push(ValidationError::with_rule(field, "tiered deposits need at least one tier", "required"));
        return;
    };

    for (i, tier) in tiers.iter().enumerate() {
        if tier.min_balance < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{field}[{i}].minBalance"),
                "must not be negative",
            ));
        }
        if let Some(max) = tier.max_balance {
            if max < tier.min_balance {
                errors.push(ValidationError::with_rule(
                    format!("{field}[{i}].maxBalance"),
                    format!("{max} is below minimum {}", tier.min_balance),
                    "ordering",
                ));
            }
        }
        if tier.rate_percent < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("{field}[{i}].ratePercent"),
                "must not be negative",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn record() -> DepositRecord {
        DepositRecord::new(dec!(1000), dec!(5), date(2024, 1, 1))
    }

    #[test]
    fn test_defaults_to_monthly_compound() {
        let contract = record().to_contract();
        assert_eq!(contract.regime, InterestRegime::Compound);
        assert_eq!(contract.compounding_frequency, CompoundingFrequency::Monthly);
        assert!(record().is_valid());
    }

    #[test]
    fn test_unknown_type_maps_to_compound() {
        let mut r = record();
        r.interest_type = Some("fancy".to_string());
        assert_eq!(r.to_contract().regime, InterestRegime::Compound);
        let errors = r.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "interestType");
    }

    #[test]
    fn test_missing_schedule_becomes_empty() {
        let mut r = record();
        r.interest_type = Some("Tiered".to_string());
        assert_eq!(r.to_contract().regime, InterestRegime::Tiered { tiers: vec![] });
        assert_eq!(r.validate()[0].rule.as_deref(), Some("required"));
    }

    #[test]
    fn test_unknown_frequency_falls_back() {
        let mut r = record();
        r.compounding_frequency = Some("weekly".to_string());
        assert_eq!(r.to_contract().compounding_frequency, CompoundingFrequency::Monthly);
        assert!(!r.is_valid());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut r = DepositRecord::new(dec!(-5), dec!(150), date(2024, 1, 1));
        r.maturity_date = Some(date(2023, 1, 1));
        r.interest_type = Some("variable".to_string());
        r.variable_schedule = Some(vec![
            RateChange::new(date(2024, 6, 1), dec!(4)),
            RateChange::new(date(2024, 6, 1), dec!(-1)),
        ]);

        let fields: Vec<String> = r.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "principal",
                "annualRatePercent",
                "maturityDate",
                "variableSchedule[1].effectiveDate",
                "variableSchedule[1].ratePercent",
            ]
        );
        assert!(r.validate_or_error().is_err());
    }

    #[test]
    fn test_tier_and_stage_rules() {
        let mut tiered = record();
        tiered.interest_type = Some("tiered".to_string());
        tiered.tiered_schedule = Some(vec![BalanceTier::new(dec!(500), Some(dec!(100)), dec!(3))]);
        assert_eq!(tiered.validate()[0].field, "tieredSchedule[0].maxBalance");

        let mut progressive = record();
        progressive.interest_type = Some("progressive".to_string());
        progressive.progressive_schedule = Some(vec![RateStage::new(0, dec!(3))]);
        assert_eq!(progressive.validate()[0].field, "progressiveSchedule[0].durationMonths");
    }

    #[test]
    fn test_record_json() {
        let json = r#"{
            "name": "Ladder",
            "principal": 12000,
            "interestRate": 6.5,
            "startDate": "2024-01-01",
            "maturityDate": "2025-01-01",
            "compoundingFrequency": "monthly",
            "interestType": "progressive",
            "progressiveSchedule": [
                { "durationMonths": 6, "ratePercent": 6.0 },
                { "durationMonths": 6, "ratePercent": 7.0 }
            ]
        }"#;
        let r: DepositRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.label(), "Ladder");
        assert_eq!(r.annual_rate_percent, dec!(6.5));
        assert!(r.is_valid());
        match r.to_contract().regime {
            InterestRegime::Progressive { stages } => assert_eq!(stages.len(), 2),
            other => panic!("unexpected regime {other}"),
        }
    }
}
