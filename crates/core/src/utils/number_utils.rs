//! Locale-independent numeric display formatting.

use rust_decimal::Decimal;

use crate::constants::NOT_AVAILABLE;

/// Format an optional numeric value as a thousands-grouped integer string.
///
/// Total over its input: every call yields a displayable string. A missing
/// value renders as [`NOT_AVAILABLE`]; a present value is rounded to the
/// nearest integer (banker's rounding) and grouped in threes, so
/// `1234567` becomes `"1,234,567"`.
pub fn format_grouped(value: Option<Decimal>) -> String {
    match value {
        Some(value) => group_thousands(value),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(value: Decimal) -> String {
    let rounded = value.round();
    if rounded.is_zero() {
        // Keeps small negative fractions from rendering as "-0".
        return "0".to_string();
    }

    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
