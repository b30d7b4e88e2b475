// Tax module - MEI fee table, alternative regime estimates and the comparator

pub mod activity;
pub mod comparator;
pub mod schedule;
pub mod self_employed;

pub use activity::ActivityCategory;
pub use comparator::{compare, compare_default, ComparisonResult, Regime, RegimeComparison};
pub use schedule::{resolve_schedule, DasFee, TaxSchedule};
pub use self_employed::SelfEmployedEstimate;
