//! Formatting and lenient parsing helpers.
//!
//! Rate values arrive as decimal text and are compared and charted as
//! numbers. Parsing follows the forgiving rules of a browser's
//! `parseFloat`/`parseInt`: the longest numeric prefix wins and anything
//! unparsable reads as zero.

use chrono::NaiveDate;

/// Formats a calendar date in the fixed `ru-RU` layout (`DD.MM.YYYY`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Parses the leading floating-point number of `text`.
///
/// Leading whitespace is skipped. Returns `0.0` when no number is found.
#[must_use]
pub fn parse_decimal(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when it carries at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match trimmed[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parses the leading integer of `text`, returning `0` when there is none.
#[must_use]
pub fn parse_integer(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }
    trimmed[..end].parse().unwrap_or(0)
}

/// Formats a value with two decimals, the way rates are displayed.
#[must_use]
pub fn format_rate(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats a change value with an explicit `+` for positive numbers.
///
/// Zero and negative values are printed as-is; trailing zeros are dropped
/// (`3.27`, `-5.3`, `0`).
#[must_use]
pub fn format_signed(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // -0.0 prints as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded > 0.0 {
        format!("+{rounded}")
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use rstest::rstest;

    #[test]
    fn test_format_date_uses_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_snapshot!(format_date(date), @"03.03.2025");
    }

    #[rstest]
    #[case::plain("505.50", 505.5)]
    #[case::negative("-1.25", -1.25)]
    #[case::leading_space("  42", 42.0)]
    #[case::trailing_garbage("12.5abc", 12.5)]
    #[case::leading_dot(".5", 0.5)]
    #[case::trailing_dot("7.", 7.0)]
    #[case::exponent("1e3", 1000.0)]
    #[case::dangling_exponent("2e", 2.0)]
    #[case::empty("", 0.0)]
    #[case::letters("abc", 0.0)]
    #[case::lone_sign("-", 0.0)]
    #[case::lone_dot(".", 0.0)]
    fn test_parse_decimal(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(parse_decimal(input), expected);
    }

    #[rstest]
    #[case::plain("12", 12)]
    #[case::negative("-3", -3)]
    #[case::decimal_text("7.9", 7)]
    #[case::suffix("15px", 15)]
    #[case::empty("", 0)]
    #[case::letters("x1", 0)]
    fn test_parse_integer(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_integer(input), expected);
    }

    #[test]
    fn test_format_rate_two_decimals() {
        assert_eq!(format_rate(505.5), "505.50");
        assert_eq!(format_rate(508.77), "508.77");
        assert_eq!(format_rate(0.0), "0.00");
    }

    #[rstest]
    #[case::positive(3.27, "+3.27")]
    #[case::zero(0.0, "0")]
    #[case::negative_zero(-0.0, "0")]
    #[case::negative(-5.3, "-5.3")]
    #[case::long_fraction(1.2000001, "+1.2")]
    fn test_format_signed(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_signed(value), expected);
    }
}
