//! Revenue entry parsing.
//!
//! Revenue is typed like a masked currency field: only digits count and the
//! last two digits are centavos, so `"3.000,00"`, `"R$ 3000,00"` and
//! `"300000"` all mean R$ 3.000,00. Anything without digits is zero.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Non-negative monthly revenue held in centavos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct RevenueInput {
    cents: u64,
}

impl RevenueInput {
    pub fn from_cents(cents: u64) -> Self {
        RevenueInput { cents }
    }

    /// Parse raw text, keeping only ASCII digits.
    ///
    /// Empty text, text without digits, or more digits than fit in `u64`
    /// centavos all yield zero.
    pub fn parse(raw: &str) -> Self {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let cents = digits.parse::<u64>().unwrap_or(0);
        RevenueInput { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Amount in reais
    pub fn amount(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.cents), 2)
    }

    /// Re-render the entry the way the input mask shows it: "3.000,00"
    pub fn masked(&self) -> String {
        crate::utils::format_decimal_br(self.amount())
    }
}

impl fmt::Display for RevenueInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
