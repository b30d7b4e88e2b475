use mei::input::RevenueInput;
use mei::tax::self_employed::{contribution, income_tax};
use mei::tax::{compare, compare_default, ActivityCategory, TaxSchedule};
use mei::utils::{format_currency, format_percent};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Revenues from R$ 0,01 to R$ 20.000,00 with uneven steps
fn revenue_samples() -> Vec<Decimal> {
    let mut samples = vec![dec!(0.01), dec!(1), dec!(1518), dec!(2826.65), dec!(2826.66)];
    let mut revenue = dec!(100);
    while revenue <= dec!(20000) {
        samples.push(revenue);
        revenue += dec!(337.33);
    }
    samples.extend([dec!(4664.68), dec!(6750), dec!(7590), dec!(10125)]);
    samples.sort();
    samples
}

#[test]
fn test_no_result_without_revenue_for_every_activity() {
    for activity in ActivityCategory::ALL {
        assert!(compare_default(Decimal::ZERO, activity).is_none());
        let empty = RevenueInput::parse("");
        assert!(compare_default(empty.amount(), activity).is_none());
    }
}

#[test]
fn test_derived_fields_hold_for_all_revenues() {
    let schedule = TaxSchedule::builtin();

    for activity in ActivityCategory::ALL {
        for revenue in revenue_samples() {
            let r = compare(revenue, activity, schedule).expect("positive revenue");

            assert_eq!(r.annual_revenue, revenue * dec!(12));
            assert_eq!(r.within_limit, r.annual_revenue <= dec!(81000));
            assert_eq!(r.limit_used_fraction, r.annual_revenue / dec!(81000));
            assert_eq!(r.fixed_annual_fee, r.fixed_fee * dec!(12));
            assert_eq!(
                r.effective_rate,
                r.fixed_annual_fee / r.annual_revenue * dec!(100)
            );
            assert_eq!(r.net_monthly_mei, revenue - r.fixed_fee);
            assert_eq!(
                r.net_monthly_self_employed,
                revenue - r.self_employed.income_tax - r.self_employed.contribution
            );
        }
    }
}

#[test]
fn test_fee_lookup_is_exact() {
    let revenue = dec!(2500);
    let fee = |a| compare_default(revenue, a).unwrap().fixed_fee;
    assert_eq!(fee(ActivityCategory::Service), dec!(80.90));
    assert_eq!(fee(ActivityCategory::Commerce), dec!(76.90));
    assert_eq!(fee(ActivityCategory::Both), dec!(81.90));
}

#[test]
fn test_contribution_never_exceeds_cap() {
    let schedule = TaxSchedule::builtin();
    let cap = dec!(1518) * dec!(0.11) * dec!(5);

    for revenue in revenue_samples() {
        let c = contribution(revenue, schedule);
        assert!(c <= cap, "contribution {} above cap at {}", c, revenue);
        if revenue >= dec!(7590) {
            assert_eq!(c, cap);
        }
    }
}

#[test]
fn test_income_tax_zero_then_increasing() {
    let brackets = &TaxSchedule::builtin().income_tax;
    let mut previous: Option<Decimal> = None;

    for revenue in revenue_samples() {
        let tax = income_tax(revenue, brackets);
        if revenue <= dec!(2826.65) {
            assert_eq!(tax, Decimal::ZERO, "tax should be zero at {}", revenue);
            continue;
        }
        assert!(tax > Decimal::ZERO);
        if let Some(prev) = previous {
            assert!(tax >= prev);
        }
        previous = Some(tax);
    }
}

#[test]
fn test_effective_rate_falls_as_revenue_rises() {
    let low = compare_default(dec!(1000), ActivityCategory::Service).unwrap();
    let high = compare_default(dec!(6000), ActivityCategory::Service).unwrap();
    assert!(high.effective_rate < low.effective_rate);
}

#[test]
fn test_scenario_a_end_to_end_from_masked_text() {
    let revenue = RevenueInput::parse("3.000,00");
    let r = compare_default(revenue.amount(), ActivityCategory::Service).unwrap();

    assert_eq!(r.annual_revenue, dec!(36000));
    assert!(r.within_limit);
    assert_eq!(format_currency(r.fixed_fee), "R$ 80,90");
    assert_eq!(r.effective_rate.round_dp(3), dec!(2.697));
    assert_eq!(format_currency(r.net_monthly_mei), "R$ 2.919,10");
}

#[test]
fn test_scenario_b_over_ceiling() {
    let revenue = RevenueInput::parse("8.000,00");
    let r = compare_default(revenue.amount(), ActivityCategory::Commerce).unwrap();

    assert_eq!(r.annual_revenue, dec!(96000));
    assert!(!r.within_limit);
    assert_eq!(r.limit_used_fraction.round_dp(3), dec!(1.185));
    assert_eq!(format_percent(r.limit_used_fraction), "118,5%");
}

#[test]
fn test_usage_reported_above_one_hundred_percent() {
    let r = compare_default(dec!(10125), ActivityCategory::Both).unwrap();
    assert_eq!(r.limit_used_fraction, dec!(1.5));
    assert_eq!(format_percent(r.limit_used_fraction), "150,0%");
}
