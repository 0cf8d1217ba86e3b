//! Sorting of currency records.
//!
//! Sorting is non-destructive and stable: records comparing equal keep their
//! input order regardless of direction, because descending order reverses the
//! comparison rather than the output.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::currency::CurrencyRecord;
use super::error::RatesError;
use super::format::{parse_decimal, parse_integer};

// ============================================================================
// Sort Field / Direction
// ============================================================================

/// Record field the table can be ordered by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Currency code, lexicographic.
    Code,
    /// Currency name, lexicographic.
    Name,
    /// Rate, numeric.
    Rate,
    /// Daily change, numeric.
    Delta,
    /// Display order hint, integer.
    #[default]
    SortKey,
}

impl SortField {
    /// Returns a short human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::Rate => "rate",
            Self::Delta => "change",
            Self::SortKey => "default order",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = RatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" | "currency" => Ok(Self::Code),
            "name" => Ok(Self::Name),
            "rate" | "value" => Ok(Self::Rate),
            "delta" | "change" => Ok(Self::Delta),
            "sort" | "sort_key" | "order" => Ok(Self::SortKey),
            other => Err(RatesError::invalid_input(format!(
                "unknown sort field '{other}'"
            ))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// Compares two records on `field` in `direction`.
#[must_use]
pub fn compare(
    a: &CurrencyRecord,
    b: &CurrencyRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let ordering = match field {
        SortField::Code => a.code.cmp(&b.code),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Rate => compare_numbers(parse_decimal(&a.rate), parse_decimal(&b.rate)),
        SortField::Delta => compare_numbers(finite_or_zero(a.delta), finite_or_zero(b.delta)),
        SortField::SortKey => parse_integer(&a.sort_key).cmp(&parse_integer(&b.sort_key)),
    };
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Returns a sorted copy of `records`.
#[must_use]
pub fn sort_records(
    records: &[CurrencyRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<CurrencyRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare(a, b, field, direction));
    sorted
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::Trend;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn record(code: &str, name: &str, rate: &str, delta: f64, sort_key: &str) -> CurrencyRecord {
        CurrencyRecord {
            code: code.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            delta,
            trend: Trend::from_change(delta),
            logo: None,
            name: name.to_string(),
            units_per_quote: "1".to_string(),
            sort_key: sort_key.to_string(),
            rate: rate.to_string(),
        }
    }

    fn sample() -> Vec<CurrencyRecord> {
        vec![
            record("USD", "US Dollar", "505.50", 1.2, "1"),
            record("EUR", "Euro", "525.10", -0.4, "2"),
            record("RUB", "Russian Ruble", "5.62", 0.0, "3"),
            record("CNY", "Yuan", "69.40", 0.35, "10"),
        ]
    }

    fn codes(records: &[CurrencyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.code.as_str()).collect()
    }

    #[rstest]
    #[case::code(SortField::Code, vec!["CNY", "EUR", "RUB", "USD"])]
    #[case::name(SortField::Name, vec!["EUR", "RUB", "USD", "CNY"])]
    #[case::rate(SortField::Rate, vec!["RUB", "CNY", "USD", "EUR"])]
    #[case::delta(SortField::Delta, vec!["EUR", "RUB", "CNY", "USD"])]
    #[case::sort_key_is_numeric(SortField::SortKey, vec!["USD", "EUR", "RUB", "CNY"])]
    fn test_ascending_order(#[case] field: SortField, #[case] expected: Vec<&str>) {
        let sorted = sort_records(&sample(), field, SortDirection::Asc);
        assert_eq!(codes(&sorted), expected);
    }

    #[test]
    fn test_rate_desc_is_reverse_of_asc() {
        let records = sample();
        let asc = sort_records(&records, SortField::Rate, SortDirection::Asc);
        let mut desc = sort_records(&records, SortField::Rate, SortDirection::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sorting_leaves_input_untouched() {
        let records = sample();
        let before = records.clone();
        let _ = sort_records(&records, SortField::Name, SortDirection::Desc);
        assert_eq!(records, before);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let records = vec![
            record("AAA", "First", "1.00", 0.0, ""),
            record("BBB", "Second", "1.00", 0.0, ""),
            record("CCC", "Third", "0.50", 0.0, ""),
        ];
        let asc = sort_records(&records, SortField::Rate, SortDirection::Asc);
        let desc = sort_records(&records, SortField::Rate, SortDirection::Desc);
        assert_eq!(codes(&asc), vec!["CCC", "AAA", "BBB"]);
        assert_eq!(codes(&desc), vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn test_unparsable_values_sort_as_zero() {
        let records = vec![
            record("AAA", "A", "12", 0.0, "5"),
            record("BBB", "B", "garbage", f64::NAN, "x"),
            record("CCC", "C", "-3", -1.0, ""),
        ];
        let by_rate = sort_records(&records, SortField::Rate, SortDirection::Asc);
        assert_eq!(codes(&by_rate), vec!["CCC", "BBB", "AAA"]);

        let by_delta = sort_records(&records, SortField::Delta, SortDirection::Asc);
        assert_eq!(codes(&by_delta), vec!["CCC", "AAA", "BBB"]);

        let by_key = sort_records(&records, SortField::SortKey, SortDirection::Asc);
        assert_eq!(codes(&by_key), vec!["BBB", "CCC", "AAA"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_records(&[], SortField::Code, SortDirection::Desc).is_empty());
    }

    #[rstest]
    #[case("code", SortField::Code)]
    #[case("Currency", SortField::Code)]
    #[case("value", SortField::Rate)]
    #[case("delta", SortField::Delta)]
    #[case("sort", SortField::SortKey)]
    fn test_sort_field_from_str(#[case] input: &str, #[case] expected: SortField) {
        assert_eq!(input.parse::<SortField>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        assert!("volume".parse::<SortField>().is_err());
    }

    #[test]
    fn test_direction_flip() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    }
}
