//! Utility functions for formatting and common operations
//!
//! This module provides centralized formatting utilities for consistent
//! display of currency, decimal and percentage values throughout the
//! application.
//!
//! All formatters round half away from zero at the displayed precision
//! (`R$ 0,005` → `R$ 0,01`, `0.0005` → `0,1%`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol options for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol {
    /// Include "R$ " prefix (Brazilian Real)
    BRL,
    /// No currency symbol (for table cells, masked input)
    None,
}

/// Round half away from zero and render with pt-BR separators:
/// `.` between thousands and `,` before the decimals.
fn format_br(value: Decimal, decimal_places: u32) -> String {
    let rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let is_negative = rounded < Decimal::ZERO;

    let formatted = format!("{:.*}", decimal_places as usize, rounded.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let with_separators = group_thousands(integer_part);
    let sign = if is_negative { "-" } else { "" };

    match decimal_part {
        Some(dec) => format!("{}{},{}", sign, with_separators, dec),
        None => format!("{}{}", sign, with_separators),
    }
}

/// Insert `.` every three digits from the right
fn group_thousands(digits: &str) -> String {
    digits
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec!['.', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Core formatting function with full control over output.
///
/// Formats a Decimal value using Brazilian locale conventions:
/// - Thousands separator: `.` (period)
/// - Decimal separator: `,` (comma)
/// - Always two decimal places
///
/// # Arguments
/// * `value` - The decimal value to format
/// * `width` - Minimum width for padding (0 for no padding, right-aligned)
/// * `symbol` - Whether to include currency symbol
///
/// # Examples
/// ```
/// use mei::utils::{format_currency_with_width, CurrencySymbol};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     format_currency_with_width(dec!(1234.56), 0, CurrencySymbol::BRL),
///     "R$ 1.234,56"
/// );
///
/// assert_eq!(
///     format_currency_with_width(dec!(1234), 15, CurrencySymbol::None),
///     "       1.234,00"
/// );
/// ```
pub fn format_currency_with_width(value: Decimal, width: usize, symbol: CurrencySymbol) -> String {
    let prefix = match symbol {
        CurrencySymbol::BRL => "R$ ",
        CurrencySymbol::None => "",
    };

    let result = format!("{}{}", prefix, format_br(value, 2));

    // Apply width padding (right-align)
    let len = result.chars().count();
    if width > 0 && len < width {
        format!("{}{}", " ".repeat(width - len), result)
    } else {
        result
    }
}

// ============ Convenience functions ============

/// Format as Brazilian Real with symbol: "R$ 1.234,56"
///
/// # Examples
/// ```
/// use mei::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(80.90)), "R$ 80,90");
/// assert_eq!(format_currency(dec!(-500)), "R$ -500,00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format_currency_with_width(value, 0, CurrencySymbol::BRL)
}

/// Format as Brazilian Real, right-aligned to specified width.
///
/// # Examples
/// ```
/// use mei::utils::format_currency_aligned;
/// use rust_decimal_macros::dec;
///
/// let result = format_currency_aligned(dec!(100), 15);
/// assert_eq!(result, "      R$ 100,00");
/// ```
pub fn format_currency_aligned(value: Decimal, width: usize) -> String {
    format_currency_with_width(value, width, CurrencySymbol::BRL)
}

/// Format number only (no symbol): "1.234,56"
///
/// # Examples
/// ```
/// use mei::utils::format_decimal_br;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_decimal_br(dec!(1234.56)), "1.234,56");
/// ```
pub fn format_decimal_br(value: Decimal) -> String {
    format_currency_with_width(value, 0, CurrencySymbol::None)
}

/// Format a fraction as a percentage with one decimal place: 0.5 → "50,0%"
///
/// # Examples
/// ```
/// use mei::utils::format_percent;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_percent(dec!(0.5)), "50,0%");
/// assert_eq!(format_percent(dec!(1.185185)), "118,5%");
/// ```
pub fn format_percent(fraction: Decimal) -> String {
    format!("{}%", format_br(fraction * Decimal::ONE_HUNDRED, 1))
}

/// Format a value already expressed in percentage points: 2.6967 → "2,7%"
pub fn format_percent_points(points: Decimal) -> String {
    format!("{}%", format_br(points, 1))
}
