//! Interactive calculator state.
//!
//! Holds the current revenue entry and activity and recomputes the
//! comparison synchronously whenever one of them changes. Setting a value
//! equal to the current one keeps the cached result.

use tracing::debug;

use crate::input::RevenueInput;
use crate::tax::{compare, ActivityCategory, ComparisonResult, TaxSchedule};

#[derive(Debug, Clone)]
pub struct Session {
    schedule: TaxSchedule,
    revenue: RevenueInput,
    activity: ActivityCategory,
    result: Option<ComparisonResult>,
    recomputations: u64,
}

impl Session {
    pub fn new(schedule: TaxSchedule) -> Self {
        Session {
            schedule,
            revenue: RevenueInput::default(),
            activity: ActivityCategory::default(),
            result: None,
            recomputations: 0,
        }
    }

    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    pub fn revenue(&self) -> RevenueInput {
        self.revenue
    }

    pub fn activity(&self) -> ActivityCategory {
        self.activity
    }

    /// Result for the current inputs; `None` while revenue is zero
    pub fn result(&self) -> Option<&ComparisonResult> {
        self.result.as_ref()
    }

    /// Number of times the comparison has actually been recomputed
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Replace the revenue with raw typed text (digit mask semantics)
    pub fn set_revenue_text(&mut self, raw: &str) -> Option<&ComparisonResult> {
        self.set_revenue(RevenueInput::parse(raw))
    }

    pub fn set_revenue(&mut self, revenue: RevenueInput) -> Option<&ComparisonResult> {
        if revenue != self.revenue {
            self.revenue = revenue;
            self.recompute();
        }
        self.result()
    }

    pub fn set_activity(&mut self, activity: ActivityCategory) -> Option<&ComparisonResult> {
        if activity != self.activity {
            self.activity = activity;
            self.recompute();
        }
        self.result()
    }

    fn recompute(&mut self) {
        self.recomputations += 1;
        self.result = compare(self.revenue.amount(), self.activity, &self.schedule);
        debug!(
            "Recomputed comparison #{} (revenue {}, activity {})",
            self.recomputations, self.revenue, self.activity
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TaxSchedule::builtin().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_starts_empty() {
        let session = Session::default();
        assert!(session.result().is_none());
        assert_eq!(session.activity(), ActivityCategory::Service);
        assert_eq!(session.recomputations(), 0);
    }

    #[test]
    fn test_revenue_change_recomputes() {
        let mut session = Session::default();
        let result = session.set_revenue_text("3.000,00").unwrap();
        assert_eq!(result.fixed_fee, dec!(80.90));
        assert_eq!(result.net_monthly_mei, dec!(2919.10));
        assert_eq!(session.recomputations(), 1);
    }

    #[test]
    fn test_activity_change_recomputes() {
        let mut session = Session::default();
        session.set_revenue_text("300000");
        let result = session.set_activity(ActivityCategory::Commerce).unwrap();
        assert_eq!(result.fixed_fee, dec!(76.90));
        assert_eq!(session.recomputations(), 2);
    }

    #[test]
    fn test_unchanged_input_keeps_cached_result() {
        let mut session = Session::default();
        session.set_revenue_text("300000");
        session.set_revenue_text("3.000,00");
        session.set_activity(ActivityCategory::Service);
        assert_eq!(session.recomputations(), 1);
    }

    #[test]
    fn test_clearing_revenue_drops_result() {
        let mut session = Session::default();
        session.set_revenue_text("300000");
        assert!(session.result().is_some());
        assert!(session.set_revenue_text("").is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_activity_change_without_revenue_has_no_result() {
        let mut session = Session::default();
        assert!(session.set_activity(ActivityCategory::Both).is_none());
    }
}
