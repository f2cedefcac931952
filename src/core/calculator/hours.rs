//! Hours derivation for a single attendance cell.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("valid number pattern")
});

/// Hours credited for a cell from its two checkboxes.
///
/// | time in | time out | hours          |
/// |---------|----------|----------------|
/// | no      | no       | required       |
/// | yes     | yes      | 0              |
/// | yes     | no       | required / 2   |
/// | no      | yes      | required / 2   |
pub fn derive_hours(time_in: bool, time_out: bool, required: f64) -> f64 {
    match (time_in, time_out) {
        (false, false) => required,
        (true, true) => 0.0,
        _ => required / 2.0,
    }
}

/// Blur handling of a manual edit: values above `required` are cut down to
/// it, anything else is kept as entered (negatives included).
///
/// Returns `Some(required)` only when the value had to be clamped.
pub fn clamp_to_required(value: f64, required: f64) -> Option<f64> {
    if value > required { Some(required) } else { None }
}

/// Lenient numeric parse of an hours field: the longest leading decimal
/// number is used, and text without one counts as 0.
pub fn parse_hours(text: &str) -> f64 {
    LEADING_NUMBER
        .find(text)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Render an hours value the way the field shows it: `2`, `1.5`, `0.25`.
pub fn format_hours(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{value}")
}

/// Row totals are always shown with two decimals.
pub fn format_total(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_matches_checkbox_table() {
        assert_eq!(derive_hours(false, false, 4.0), 4.0);
        assert_eq!(derive_hours(true, true, 4.0), 0.0);
        assert_eq!(derive_hours(true, false, 4.0), 2.0);
        assert_eq!(derive_hours(false, true, 4.0), 2.0);
    }

    #[test]
    fn half_credit_keeps_fractions() {
        assert_eq!(derive_hours(true, false, 3.0), 1.5);
    }

    #[test]
    fn clamp_only_above_required() {
        assert_eq!(clamp_to_required(5.0, 2.0), Some(2.0));
        assert_eq!(clamp_to_required(2.0, 2.0), None);
        assert_eq!(clamp_to_required(1.0, 2.0), None);
        assert_eq!(clamp_to_required(-3.0, 2.0), None);
    }

    #[test]
    fn parse_takes_leading_number() {
        assert_eq!(parse_hours("1.5"), 1.5);
        assert_eq!(parse_hours("  3 "), 3.0);
        assert_eq!(parse_hours("2h"), 2.0);
        assert_eq!(parse_hours(".5"), 0.5);
        assert_eq!(parse_hours("-1"), -1.0);
        assert_eq!(parse_hours("1e1"), 10.0);
    }

    #[test]
    fn parse_falls_back_to_zero() {
        assert_eq!(parse_hours(""), 0.0);
        assert_eq!(parse_hours("abc"), 0.0);
        assert_eq!(parse_hours("-"), 0.0);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_hours(2.0), "2");
        assert_eq!(format_hours(1.5), "1.5");
        assert_eq!(format_hours(-0.0), "0");
        assert_eq!(format_total(3.0), "3.00");
        assert_eq!(format_total(2.0 / 3.0), "0.67");
    }
}
