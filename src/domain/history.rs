//! Synthetic rate history for the detail panel.
//!
//! The history is derived from a single record: the current quotation
//! followed by five fabricated days with a fixed change pattern.

use chrono::{Days, NaiveDate};

use super::currency::{CurrencyRecord, Trend};
use super::format::{format_rate, parse_decimal};

/// Number of points in a generated series.
pub const HISTORY_LEN: usize = 6;

/// Day-over-day changes of the synthetic points, newest first.
const CHANGES: [f64; HISTORY_LEN - 1] = [3.27, 0.0, 0.0, -0.24, -5.3];

/// Trends matching [`CHANGES`].
const TRENDS: [Trend; HISTORY_LEN - 1] =
    [Trend::Up, Trend::Same, Trend::Same, Trend::Down, Trend::Down];

/// One day of rate history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    /// Rate with two decimals.
    pub rate: String,
    pub change: f64,
    pub trend: Trend,
}

/// Builds the six-point history of `record`, newest first.
///
/// Point 0 mirrors the record. Point `i + 1` is dated `i + 1` days earlier;
/// only the first synthetic point shifts the rate (by `+3.27`), the rest
/// repeat the base rate.
#[must_use]
pub fn generate_history(record: &CurrencyRecord) -> [HistoricalPoint; HISTORY_LEN] {
    let base = parse_decimal(&record.rate);

    std::array::from_fn(|index| {
        if index == 0 {
            return HistoricalPoint {
                date: record.date,
                rate: format_rate(base),
                change: record.delta,
                trend: record.trend,
            };
        }
        let offset = index - 1;
        let shift = if offset == 0 { CHANGES[offset] } else { 0.0 };
        HistoricalPoint {
            date: days_before(record.date, index as u64),
            rate: format_rate(base + shift),
            change: CHANGES[offset],
            trend: TRENDS[offset],
        }
    })
}

/// Rate values of a series in chronological order (oldest first).
#[must_use]
pub fn chronological_values(series: &[HistoricalPoint]) -> Vec<f64> {
    series
        .iter()
        .rev()
        .map(|point| parse_decimal(&point.rate))
        .collect()
}

/// Total change reported across a series.
///
/// Shown in the detail header as the change over the covered period.
#[must_use]
pub fn period_change(series: &[HistoricalPoint]) -> f64 {
    let total: f64 = series.iter().map(|point| point.change).sum();
    (total * 100.0).round() / 100.0
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}
