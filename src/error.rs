//! Error handling for the MEI simulator
//!
//! Defines custom error types and establishes a unified Result type
//! using anyhow for context chaining and error propagation.

use thiserror::Error;

/// Errors raised while interpreting user-facing input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("unknown activity '{0}' (expected comercio, servico or ambos)")]
    UnknownActivity(String),
}

/// Errors raised when a tax schedule is inconsistent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("annual ceiling must be positive, got {0}")]
    NonPositiveCeiling(String),

    #[error("minimum wage must be positive, got {0}")]
    NonPositiveMinimumWage(String),

    #[error("DAS fee for {activity} must not be negative, got {value}")]
    NegativeFee { activity: String, value: String },

    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange { name: String, value: String },

    #[error("income tax brackets must be non-empty")]
    NoBrackets,

    #[error("income tax brackets must have increasing thresholds and rates (bracket {0})")]
    BracketsOutOfOrder(usize),
}

/// Result type alias for application operations
pub type Result<T> = anyhow::Result<T>;
