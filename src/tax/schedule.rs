//! Tax schedule - every constant the comparator depends on
//!
//! A schedule describes one tax period: the DAS fee table, the MEI revenue
//! ceiling, the minimum wage reference, the monthly income-tax brackets and
//! the rates used by the alternative-regime estimates. Switching periods
//! means loading another schedule (TOML), never editing the comparator.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::activity::ActivityCategory;
use crate::error::ScheduleError;

/// Environment variable pointing at a schedule file
pub const SCHEDULE_ENV: &str = "MEI_SCHEDULE";
const SCHEDULE_FILENAME: &str = "schedule.toml";

static BUILTIN_SCHEDULE: Lazy<TaxSchedule> = Lazy::new(TaxSchedule::period_2025);

/// Components of the monthly DAS payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DasFee {
    /// Social security share (5% of the minimum wage)
    #[serde(default)]
    pub inss: Decimal,
    /// State tax, due by commerce/industry
    #[serde(default)]
    pub icms: Decimal,
    /// Municipal tax, due by service providers
    #[serde(default)]
    pub iss: Decimal,
}

impl DasFee {
    pub fn total(&self) -> Decimal {
        self.inss + self.icms + self.iss
    }
}

/// Fixed monthly fee per activity. All three entries are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DasTable {
    pub commerce: DasFee,
    pub service: DasFee,
    pub both: DasFee,
}

impl DasTable {
    pub fn fee(&self, activity: ActivityCategory) -> &DasFee {
        match activity {
            ActivityCategory::Commerce => &self.commerce,
            ActivityCategory::Service => &self.service,
            ActivityCategory::Both => &self.both,
        }
    }
}

/// Marginal income-tax bracket: `rate` applies to monthly revenue above
/// `above`, up to the next bracket's threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    pub above: Decimal,
    pub rate: Decimal,
}

/// Self-employed social security contribution (INSS contribuinte individual)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRule {
    pub rate: Decimal,
    /// Contribution base is capped at this many minimum wages
    pub cap_minimum_wages: Decimal,
}

/// Flat Simples Nacional approximation rates.
///
/// Commerce uses the lower rate (Anexo I entry bracket); service and mixed
/// activities use the higher one (Anexo III entry bracket). This is a coarse
/// two-rate heuristic, not the progressive Simples tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplesRates {
    pub commerce: Decimal,
    pub service: Decimal,
}

impl SimplesRates {
    pub fn rate_for(&self, activity: ActivityCategory) -> Decimal {
        match activity {
            ActivityCategory::Commerce => self.commerce,
            ActivityCategory::Service | ActivityCategory::Both => self.service,
        }
    }
}

/// Complete set of constants for one tax period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Human-readable period the values are in force for (e.g. "2025")
    pub period: String,
    pub minimum_wage: Decimal,
    pub annual_ceiling: Decimal,
    pub das: DasTable,
    pub income_tax: Vec<IncomeTaxBracket>,
    pub contribution: ContributionRule,
    pub simples: SimplesRates,
}

impl TaxSchedule {
    /// Schedule in force from January 2025 (minimum wage R$ 1.518,00).
    ///
    /// DAS = INSS 5% of the minimum wage (75,90) + ICMS 1,00 and/or ISS 5,00.
    pub fn period_2025() -> Self {
        let inss = Decimal::new(7590, 2);
        let icms = Decimal::new(100, 2);
        let iss = Decimal::new(500, 2);

        TaxSchedule {
            period: "2025".to_string(),
            minimum_wage: Decimal::new(1518, 0),
            annual_ceiling: Decimal::new(81000, 0),
            das: DasTable {
                commerce: DasFee {
                    inss,
                    icms,
                    iss: Decimal::ZERO,
                },
                service: DasFee {
                    inss,
                    icms: Decimal::ZERO,
                    iss,
                },
                both: DasFee { inss, icms, iss },
            },
            income_tax: vec![
                IncomeTaxBracket {
                    above: Decimal::new(282665, 2),
                    rate: Decimal::new(15, 2),
                },
                IncomeTaxBracket {
                    above: Decimal::new(466468, 2),
                    rate: Decimal::new(275, 3),
                },
            ],
            contribution: ContributionRule {
                rate: Decimal::new(11, 2),
                cap_minimum_wages: Decimal::new(5, 0),
            },
            simples: SimplesRates {
                commerce: Decimal::new(4, 2),
                service: Decimal::new(6, 2),
            },
        }
    }

    /// Shared built-in schedule
    pub fn builtin() -> &'static TaxSchedule {
        &BUILTIN_SCHEDULE
    }

    pub fn monthly_ceiling(&self) -> Decimal {
        self.annual_ceiling / Decimal::from(12)
    }

    pub fn fixed_fee(&self, activity: ActivityCategory) -> Decimal {
        self.das.fee(activity).total()
    }

    /// Highest monthly contribution a self-employed individual pays
    pub fn contribution_cap(&self) -> Decimal {
        self.minimum_wage * self.contribution.rate * self.contribution.cap_minimum_wages
    }

    /// Deductions for the `rate * revenue - deduction` form of each bracket,
    /// chosen so the tax is continuous at every threshold.
    pub fn bracket_deductions(&self) -> Vec<Decimal> {
        let mut deductions = Vec::with_capacity(self.income_tax.len());
        let mut previous_rate = Decimal::ZERO;
        let mut previous_deduction = Decimal::ZERO;

        for bracket in &self.income_tax {
            let deduction = previous_deduction + (bracket.rate - previous_rate) * bracket.above;
            deductions.push(deduction);
            previous_rate = bracket.rate;
            previous_deduction = deduction;
        }

        deductions
    }

    /// Check the invariants the comparator relies on
    pub fn validate(&self) -> std::result::Result<(), ScheduleError> {
        if self.annual_ceiling <= Decimal::ZERO {
            return Err(ScheduleError::NonPositiveCeiling(
                self.annual_ceiling.to_string(),
            ));
        }
        if self.minimum_wage <= Decimal::ZERO {
            return Err(ScheduleError::NonPositiveMinimumWage(
                self.minimum_wage.to_string(),
            ));
        }

        for activity in ActivityCategory::ALL {
            let fee = self.das.fee(activity);
            let parts = [fee.inss, fee.icms, fee.iss, fee.total()];
            if let Some(value) = parts.iter().find(|v| **v < Decimal::ZERO) {
                return Err(ScheduleError::NegativeFee {
                    activity: activity.as_str().to_string(),
                    value: value.to_string(),
                });
            }
        }

        check_rate("contribution rate", self.contribution.rate)?;
        check_rate("simples commerce rate", self.simples.commerce)?;
        check_rate("simples service rate", self.simples.service)?;
        if self.contribution.cap_minimum_wages < Decimal::ZERO {
            return Err(ScheduleError::RateOutOfRange {
                name: "contribution cap".to_string(),
                value: self.contribution.cap_minimum_wages.to_string(),
            });
        }

        if self.income_tax.is_empty() {
            return Err(ScheduleError::NoBrackets);
        }
        let mut previous: Option<&IncomeTaxBracket> = None;
        for (idx, bracket) in self.income_tax.iter().enumerate() {
            check_rate("income tax rate", bracket.rate)?;
            let ordered = match previous {
                None => bracket.above >= Decimal::ZERO && bracket.rate > Decimal::ZERO,
                Some(prev) => bracket.above > prev.above && bracket.rate > prev.rate,
            };
            if !ordered {
                return Err(ScheduleError::BracketsOutOfOrder(idx));
            }
            previous = Some(bracket);
        }

        Ok(())
    }

    /// Parse and validate a schedule from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let schedule: TaxSchedule = toml::from_str(text).context("Invalid schedule TOML")?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Load a schedule file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schedule file {}", path.display()))?;
        let schedule = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to load schedule file {}", path.display()))?;
        info!(
            "Loaded tax schedule for period {} from {}",
            schedule.period,
            path.display()
        );
        Ok(schedule)
    }

    /// Serialize to TOML (used by `schedule --toml` to bootstrap a custom file)
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize schedule")
    }
}

fn check_rate(name: &str, rate: Decimal) -> std::result::Result<(), ScheduleError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ScheduleError::RateOutOfRange {
            name: name.to_string(),
            value: rate.to_string(),
        });
    }
    Ok(())
}

/// Default location of a user schedule: `<config home>/mei/schedule.toml`
pub fn default_schedule_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dir_spec::config_home)
        .map(|dir| dir.join("mei").join(SCHEDULE_FILENAME))
}

/// Pick the active schedule.
///
/// Order: explicit path, `MEI_SCHEDULE`, the default config file when it
/// exists, then the built-in schedule.
pub fn resolve_schedule(explicit: Option<&Path>) -> Result<TaxSchedule> {
    if let Some(path) = explicit {
        return TaxSchedule::load(path);
    }

    if let Some(path) = std::env::var_os(SCHEDULE_ENV).filter(|p| !p.is_empty()) {
        return TaxSchedule::load(Path::new(&path));
    }

    if let Some(path) = default_schedule_path().filter(|p| p.exists()) {
        return TaxSchedule::load(&path);
    }

    debug!("Using built-in tax schedule");
    Ok(TaxSchedule::builtin().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_fee_table() {
        let schedule = TaxSchedule::builtin();
        assert_eq!(schedule.fixed_fee(ActivityCategory::Commerce), dec!(76.90));
        assert_eq!(schedule.fixed_fee(ActivityCategory::Service), dec!(80.90));
        assert_eq!(schedule.fixed_fee(ActivityCategory::Both), dec!(81.90));
    }

    #[test]
    fn test_builtin_thresholds() {
        let schedule = TaxSchedule::builtin();
        assert_eq!(schedule.annual_ceiling, dec!(81000));
        assert_eq!(schedule.monthly_ceiling(), dec!(6750));
        assert_eq!(schedule.minimum_wage, dec!(1518));
        assert_eq!(schedule.contribution_cap(), dec!(834.90));
    }

    #[test]
    fn test_builtin_schedule_is_valid() {
        assert_eq!(TaxSchedule::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_bracket_deductions_keep_tax_continuous() {
        let schedule = TaxSchedule::builtin();
        let deductions = schedule.bracket_deductions();
        assert_eq!(deductions, vec![dec!(423.9975), dec!(1007.0825)]);

        // Both forms agree at the upper threshold
        let t = schedule.income_tax[1].above;
        let lower = schedule.income_tax[0].rate * t - deductions[0];
        let upper = schedule.income_tax[1].rate * t - deductions[1];
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_simples_rates_by_activity() {
        let rates = &TaxSchedule::builtin().simples;
        assert_eq!(rates.rate_for(ActivityCategory::Commerce), dec!(0.04));
        assert_eq!(rates.rate_for(ActivityCategory::Service), dec!(0.06));
        assert_eq!(rates.rate_for(ActivityCategory::Both), dec!(0.06));
    }

    #[test]
    fn test_validate_rejects_zero_ceiling() {
        let mut schedule = TaxSchedule::period_2025();
        schedule.annual_ceiling = Decimal::ZERO;
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::NonPositiveCeiling("0".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_unordered_brackets() {
        let mut schedule = TaxSchedule::period_2025();
        schedule.income_tax.swap(0, 1);
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::BracketsOutOfOrder(1))
        );
    }

    #[test]
    fn test_validate_rejects_negative_fee() {
        let mut schedule = TaxSchedule::period_2025();
        schedule.das.both.iss = dec!(-10);
        assert!(matches!(
            schedule.validate(),
            Err(ScheduleError::NegativeFee { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        let mut schedule = TaxSchedule::period_2025();
        schedule.simples.service = dec!(6);
        assert!(matches!(
            schedule.validate(),
            Err(ScheduleError::RateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_toml_round_trip_preserves_schedule() {
        let schedule = TaxSchedule::period_2025();
        let text = schedule.to_toml_string().unwrap();
        let parsed = TaxSchedule::from_toml_str(&text).unwrap();
        assert_eq!(parsed, schedule);
    }

    #[test]
    fn test_toml_missing_activity_is_rejected() {
        let text = r#"
period = "custom"
minimum_wage = "1518"
annual_ceiling = "81000"

[das.commerce]
inss = "75.90"
icms = "1.00"

[das.service]
inss = "75.90"
iss = "5.00"

[[income_tax]]
above = "2826.65"
rate = "0.15"

[contribution]
rate = "0.11"
cap_minimum_wages = "5"

[simples]
commerce = "0.04"
service = "0.06"
"#;
        let err = TaxSchedule::from_toml_str(text).unwrap_err();
        assert!(format!("{:?}", err).contains("both"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = TaxSchedule::load(Path::new("/nonexistent/schedule.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read schedule file"));
    }
}
