//! Self-employed (Autônomo PF) estimate: monthly income tax on revenue plus
//! the capped INSS contribution.

use rust_decimal::Decimal;
use serde::Serialize;

use super::schedule::{IncomeTaxBracket, TaxSchedule};

/// Monthly and annual cost of operating as a self-employed individual
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfEmployedEstimate {
    pub income_tax: Decimal,
    pub contribution: Decimal,
    pub monthly_cost: Decimal,
    pub annual_cost: Decimal,
}

impl SelfEmployedEstimate {
    pub fn estimate(monthly_revenue: Decimal, schedule: &TaxSchedule) -> Self {
        let income_tax = income_tax(monthly_revenue, &schedule.income_tax);
        let contribution = contribution(monthly_revenue, schedule);
        let monthly_cost = income_tax + contribution;

        SelfEmployedEstimate {
            income_tax,
            contribution,
            monthly_cost,
            annual_cost: monthly_cost * Decimal::from(12),
        }
    }
}

/// Progressive income tax on a monthly amount.
///
/// Zero at or below the first threshold; each bracket's rate applies only to
/// the slice between its threshold and the next one.
pub fn income_tax(monthly_revenue: Decimal, brackets: &[IncomeTaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;

    for (idx, bracket) in brackets.iter().enumerate() {
        if monthly_revenue <= bracket.above {
            break;
        }
        let ceiling = brackets
            .get(idx + 1)
            .map(|next| next.above.min(monthly_revenue))
            .unwrap_or(monthly_revenue);
        tax += (ceiling - bracket.above) * bracket.rate;
    }

    tax
}

/// INSS contribution: flat rate on revenue, capped at a multiple of the minimum wage
pub fn contribution(monthly_revenue: Decimal, schedule: &TaxSchedule) -> Decimal {
    let uncapped = monthly_revenue * schedule.contribution.rate;
    uncapped.min(schedule.contribution_cap())
}
