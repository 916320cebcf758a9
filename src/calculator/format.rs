//! Display formatting for operands.
//!
//! Works directly on the operand string so that what the user typed is shown
//! back exactly: the integer part gains thousand separators, the fractional
//! part is never rounded or grouped.

/// Default thousands separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Format an operand for display using the default separator.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    format_operand_with(operand, DEFAULT_SEPARATOR)
}

/// Format an operand for display using `separator` between thousands groups.
///
/// Absent stays absent. An empty operand (a failed evaluation) is blank.
pub fn format_operand_with(operand: Option<&str>, separator: char) -> Option<String> {
    let operand = operand?;
    if operand.is_empty() {
        return Some(String::new());
    }

    let formatted = match operand.split_once('.') {
        Some((integer, fraction)) => {
            format!("{}.{}", format_integer(integer, separator), fraction)
        }
        None => format_integer(operand, separator),
    };
    Some(formatted)
}

/// Group the integer part of an operand.
///
/// Leading zeros are dropped and an empty part reads as `0`. Anything that
/// is not a run of digits (`Infinity`, `NaN`) is returned verbatim.
fn format_integer(integer: &str, separator: char) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return integer.to_string();
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return format!("{}0", sign);
    }

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    result.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}
