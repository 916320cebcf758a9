//! Binary evaluation of a pending operand pair.
//!
//! Operands arrive as the strings the user typed and the result leaves as a
//! string again, ready to become the next operand.

use super::state::Operation;

/// Evaluate `previous <operation> current`.
///
/// Returns an empty string if either operand is not a number. A missing
/// operator yields `"0"`. Division by zero is not guarded and produces
/// `Infinity`, `-Infinity` or `NaN`.
pub fn evaluate(previous: &str, current: &str, operation: Option<Operation>) -> String {
    let (Some(lhs), Some(rhs)) = (parse_operand(previous), parse_operand(current)) else {
        return String::new();
    };

    let value = match operation {
        Some(op) => op.apply(lhs, rhs),
        None => 0.0,
    };

    format_result(value)
}

/// Parse an operand, rejecting anything that is not a number.
fn parse_operand(operand: &str) -> Option<f64> {
    operand.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Canonical string form of a result.
///
/// Finite values use the shortest representation that parses back to the
/// same value and never use exponent notation.
fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // Covers -0.0
        "0".to_string()
    } else {
        format!("{}", value)
    }
}
