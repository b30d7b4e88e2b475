//! MEI vs. self-employed vs. Simples Nacional comparison
//!
//! `compare` is a pure function of the monthly revenue, the activity and the
//! active [`TaxSchedule`]. It returns `None` for non-positive revenue so that
//! rate calculations never divide by zero.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::activity::ActivityCategory;
use super::schedule::TaxSchedule;
use super::self_employed::SelfEmployedEstimate;

/// Regimes shown side by side in the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    Mei,
    SelfEmployed,
    Simples,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Mei => "MEI",
            Regime::SelfEmployed => "Autônomo (PF)",
            Regime::Simples => "Simples Nacional",
        }
    }
}

/// One row of the comparison table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeComparison {
    pub regime: Regime,
    pub monthly_cost: Decimal,
    /// Monthly cost as a percentage of monthly revenue
    pub revenue_share: Decimal,
    pub net_monthly: Decimal,
}

/// Everything derived from (monthly revenue, activity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub activity: ActivityCategory,
    pub monthly_revenue: Decimal,
    pub annual_revenue: Decimal,
    pub within_limit: bool,
    /// Share of the annual ceiling used; above 1 when over the limit
    pub limit_used_fraction: Decimal,
    pub fixed_fee: Decimal,
    pub fixed_annual_fee: Decimal,
    /// Fixed annual fee over annual revenue, in percent
    pub effective_rate: Decimal,
    /// Simples Nacional approximation (flat rate on revenue)
    pub simples_annual: Decimal,
    pub self_employed: SelfEmployedEstimate,
    pub net_monthly_mei: Decimal,
    pub net_monthly_self_employed: Decimal,
}

impl ComparisonResult {
    pub fn simples_monthly(&self) -> Decimal {
        self.simples_annual / Decimal::from(12)
    }

    /// Rows for MEI, self-employed and Simples, in display order
    pub fn regimes(&self) -> [RegimeComparison; 3] {
        let row = |regime, monthly_cost: Decimal, net_monthly| RegimeComparison {
            regime,
            monthly_cost,
            revenue_share: monthly_cost / self.monthly_revenue * Decimal::ONE_HUNDRED,
            net_monthly,
        };

        let simples_monthly = self.simples_monthly();
        [
            row(Regime::Mei, self.fixed_fee, self.net_monthly_mei),
            row(
                Regime::SelfEmployed,
                self.self_employed.monthly_cost,
                self.net_monthly_self_employed,
            ),
            row(
                Regime::Simples,
                simples_monthly,
                self.monthly_revenue - simples_monthly,
            ),
        ]
    }
}

/// Compare the three regimes for a monthly revenue.
///
/// Returns `None` when `monthly_revenue <= 0`.
pub fn compare(
    monthly_revenue: Decimal,
    activity: ActivityCategory,
    schedule: &TaxSchedule,
) -> Option<ComparisonResult> {
    if monthly_revenue <= Decimal::ZERO {
        return None;
    }

    let twelve = Decimal::from(12);
    let annual_revenue = monthly_revenue * twelve;

    let fixed_fee = schedule.fixed_fee(activity);
    let fixed_annual_fee = fixed_fee * twelve;
    let self_employed = SelfEmployedEstimate::estimate(monthly_revenue, schedule);

    let result = ComparisonResult {
        activity,
        monthly_revenue,
        annual_revenue,
        within_limit: annual_revenue <= schedule.annual_ceiling,
        limit_used_fraction: annual_revenue / schedule.annual_ceiling,
        fixed_fee,
        fixed_annual_fee,
        effective_rate: fixed_annual_fee / annual_revenue * Decimal::ONE_HUNDRED,
        simples_annual: annual_revenue * schedule.simples.rate_for(activity),
        net_monthly_mei: monthly_revenue - fixed_fee,
        net_monthly_self_employed: monthly_revenue - self_employed.monthly_cost,
        self_employed,
    };

    debug!(
        "Compared {} revenue {} under schedule {}: within_limit={}",
        activity, monthly_revenue, schedule.period, result.within_limit
    );

    Some(result)
}

/// `compare` with the built-in schedule
pub fn compare_default(
    monthly_revenue: Decimal,
    activity: ActivityCategory,
) -> Option<ComparisonResult> {
    compare(monthly_revenue, activity, TaxSchedule::builtin())
}
