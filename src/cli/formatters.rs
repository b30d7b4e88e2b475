//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of tax calculation from presentation.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::input::RevenueInput;
use crate::tax::{ActivityCategory, ComparisonResult, Regime, RegimeComparison, TaxSchedule};
use crate::utils::{format_currency, format_percent, format_percent_points};

/// JSON document emitted by `--json`
#[derive(Serialize)]
pub struct JsonComparison<'a> {
    pub period: &'a str,
    pub activity: ActivityCategory,
    pub revenue_input: String,
    pub result: Option<&'a ComparisonResult>,
    pub regimes: Vec<RegimeComparison>,
}

impl<'a> JsonComparison<'a> {
    pub fn new(
        schedule: &'a TaxSchedule,
        revenue: RevenueInput,
        activity: ActivityCategory,
        result: Option<&'a ComparisonResult>,
    ) -> Self {
        JsonComparison {
            period: &schedule.period,
            activity,
            revenue_input: revenue.masked(),
            result,
            regimes: result.map(|r| r.regimes().to_vec()).unwrap_or_default(),
        }
    }
}

/// Pass/fail banner against the MEI ceiling
pub fn format_banner(result: &ComparisonResult, schedule: &TaxSchedule) -> String {
    let ceiling = format_currency(schedule.annual_ceiling);

    if result.within_limit {
        format!(
            "{} {}\n  Using {} of the annual limit of {}\n",
            "✓".green().bold(),
            "You can be MEI!".green().bold(),
            format_percent(result.limit_used_fraction).bold(),
            ceiling
        )
    } else {
        format!(
            "{} {}\n  Annual revenue {} is {} of the {} limit\n  Consider opening an ME under Simples Nacional\n",
            "⚠".yellow().bold(),
            "Above the MEI limit".yellow().bold(),
            format_currency(result.annual_revenue),
            format_percent(result.limit_used_fraction).yellow(),
            ceiling
        )
    }
}

/// The four headline metrics (DAS monthly/annual, effective rate, net income)
pub fn format_metrics(result: &ComparisonResult) -> String {
    let metrics = [
        ("DAS (monthly):", format_currency(result.fixed_fee)),
        ("DAS (annual):", format_currency(result.fixed_annual_fee)),
        (
            "Effective rate:",
            format_percent_points(result.effective_rate),
        ),
        ("Net income:", format_currency(result.net_monthly_mei)),
    ];

    let mut output = String::new();
    for (label, value) in metrics {
        output.push_str(&format!("  {:<18} {}\n", label.bold(), value.cyan()));
    }
    output
}

/// Three-row comparison table: MEI, Autônomo (PF), Simples Nacional
pub fn format_regime_table(result: &ComparisonResult) -> String {
    #[derive(Tabled)]
    struct RegimeRow {
        #[tabled(rename = "Regime")]
        regime: String,
        #[tabled(rename = "Tax/month")]
        monthly_cost: String,
        #[tabled(rename = "% Revenue")]
        share: String,
        #[tabled(rename = "Net/month")]
        net: String,
    }

    let rows: Vec<RegimeRow> = result
        .regimes()
        .iter()
        .map(|row| {
            let regime = match row.regime {
                Regime::Mei => format!("★ {}", row.regime.label()).green().to_string(),
                _ => row.regime.label().to_string(),
            };
            RegimeRow {
                regime,
                monthly_cost: format_currency(row.monthly_cost),
                share: format_percent_points(row.revenue_share),
                net: format_currency(row.net_monthly),
            }
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Full comparison report for the terminal
pub fn format_comparison(result: &ComparisonResult, schedule: &TaxSchedule) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{} MEI Simulator - {} ({}) - {}/month\n\n",
        "📊".cyan().bold(),
        result.activity.label(),
        schedule.period,
        format_currency(result.monthly_revenue).bold()
    ));

    output.push_str(&format_banner(result, schedule));

    if result.within_limit {
        output.push('\n');
        output.push_str(&format_metrics(result));
    }

    output.push_str(&format!("\n{} Regime comparison\n", "📈".cyan().bold()));
    output.push_str(&format_regime_table(result));
    output.push_str(&format!(
        "\n{}\n",
        format!(
            "Simples Nacional approximated as a flat {} of revenue.",
            format_percent(schedule.simples.rate_for(result.activity))
        )
        .bright_black()
    ));
    output.push_str(&format_disclaimer());

    output
}

/// Shown when there is no revenue to compare
pub fn format_empty_result() -> String {
    format!(
        "{} Type your monthly revenue to see whether MEI suits you\n",
        "ℹ".blue().bold()
    )
}

pub fn format_disclaimer() -> String {
    format!(
        "{}\n",
        "Estimates only. Consult an accountant for tax decisions.".bright_black()
    )
}

/// Activity choices with their monthly DAS
pub fn format_activity_options(schedule: &TaxSchedule, selected: ActivityCategory) -> String {
    let mut output = String::new();
    for activity in ActivityCategory::ALL {
        let marker = if activity == selected { "●" } else { "○" };
        let line = format!(
            "  {} {:<22} {}/month",
            marker,
            format!("{} ({})", activity.label(), activity.as_str()),
            format_currency(schedule.fixed_fee(activity))
        );
        if activity == selected {
            output.push_str(&format!("{}\n", line.green()));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }
    output
}

/// Active schedule: fee table, thresholds, brackets and rates
pub fn format_schedule(schedule: &TaxSchedule) -> String {
    let mut output = format!(
        "\n{} Tax schedule - period {}\n\n",
        "📋".cyan().bold(),
        schedule.period
    );

    #[derive(Tabled)]
    struct FeeRow {
        #[tabled(rename = "Activity")]
        activity: String,
        #[tabled(rename = "INSS")]
        inss: String,
        #[tabled(rename = "ICMS")]
        icms: String,
        #[tabled(rename = "ISS")]
        iss: String,
        #[tabled(rename = "DAS/month")]
        total: String,
    }

    let fees: Vec<FeeRow> = ActivityCategory::ALL
        .iter()
        .map(|activity| {
            let fee = schedule.das.fee(*activity);
            FeeRow {
                activity: activity.label().to_string(),
                inss: format_currency(fee.inss),
                icms: format_currency(fee.icms),
                iss: format_currency(fee.iss),
                total: format_currency(fee.total()),
            }
        })
        .collect();

    let mut table = Table::new(&fees);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    output.push_str(&table.to_string());

    output.push_str(&format!("\n\n{}\n", "Thresholds".bold()));
    output.push_str(&format!(
        "  {:<24} {}\n",
        "Minimum wage:",
        format_currency(schedule.minimum_wage)
    ));
    output.push_str(&format!(
        "  {:<24} {} ({}/month)\n",
        "MEI annual ceiling:",
        format_currency(schedule.annual_ceiling),
        format_currency(schedule.monthly_ceiling())
    ));

    #[derive(Tabled)]
    struct BracketRow {
        #[tabled(rename = "Monthly revenue above")]
        above: String,
        #[tabled(rename = "Rate")]
        rate: String,
        #[tabled(rename = "Deduction")]
        deduction: String,
    }

    let brackets: Vec<BracketRow> = schedule
        .income_tax
        .iter()
        .zip(schedule.bracket_deductions())
        .map(|(bracket, deduction)| BracketRow {
            above: format_currency(bracket.above),
            rate: format_percent(bracket.rate),
            deduction: format_currency(deduction),
        })
        .collect();

    output.push_str(&format!(
        "\n{} (exempt up to the first threshold)\n",
        "Income tax (self-employed)".bold()
    ));
    let mut table = Table::new(&brackets);
    table.with(Style::rounded());
    table.modify(Columns::new(0..), Alignment::right());
    output.push_str(&table.to_string());

    output.push_str(&format!("\n\n{}\n", "Other rates".bold()));
    output.push_str(&format!(
        "  {:<24} {} capped at {}/month\n",
        "INSS (self-employed):",
        format_percent(schedule.contribution.rate),
        format_currency(schedule.contribution_cap())
    ));
    output.push_str(&format!(
        "  {:<24} {} commerce, {} services/both (approximation)\n",
        "Simples Nacional:",
        format_percent(schedule.simples.commerce),
        format_percent(schedule.simples.service)
    ));

    output
}
