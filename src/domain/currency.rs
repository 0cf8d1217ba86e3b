//! Currency record and dataset types.
//!
//! The dataset is a mapping from an ISO date to the currency records quoted
//! on that date. The JSON layout matches the rate feed fixture:
//!
//! ```json
//! { "2025-03-03": { "USD": { "currency": "USD", "index": "UP", "value": "505.50", ... } } }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::RatesError;

// ============================================================================
// Trend
// ============================================================================

/// Direction of a rate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    /// The rate went up.
    Up,
    /// The rate went down.
    Down,
    /// The rate did not change.
    #[default]
    Same,
}

impl Trend {
    /// Returns the glyph shown next to a change value.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Same => "−",
        }
    }

    /// Derives a trend from the sign of a change value.
    #[must_use]
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Same
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Same => "SAME",
        };
        f.write_str(label)
    }
}

// ============================================================================
// CurrencyRecord
// ============================================================================

/// One currency's rate data for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// ISO currency code, unique within a date partition.
    #[serde(rename = "currency")]
    pub code: String,
    /// Quotation date.
    pub date: NaiveDate,
    /// Change against the previous quotation.
    pub delta: f64,
    /// Direction of `delta`.
    #[serde(rename = "index")]
    pub trend: Trend,
    /// Optional logo reference.
    #[serde(default)]
    pub logo: Option<String>,
    /// Human readable currency name.
    pub name: String,
    /// How many units of the currency the rate is quoted for.
    #[serde(rename = "quant")]
    pub units_per_quote: String,
    /// Display order hint, integer text.
    #[serde(rename = "sort", default)]
    pub sort_key: String,
    /// Rate in tenge, decimal text.
    #[serde(rename = "value")]
    pub rate: String,
}

// ============================================================================
// DatasetByDate
// ============================================================================

/// Currency records grouped by quotation date, then by currency code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetByDate {
    partitions: BTreeMap<NaiveDate, BTreeMap<String, CurrencyRecord>>,
}

impl DatasetByDate {
    /// Decodes a dataset from JSON and checks that every partition key
    /// matches the code stored in its record.
    ///
    /// # Errors
    ///
    /// Returns [`RatesError::Parse`] for malformed JSON and
    /// [`RatesError::CodeMismatch`] for inconsistent partitions.
    pub fn from_json(json: &str) -> Result<Self, RatesError> {
        let dataset: Self = serde_json::from_str(json)?;
        for partition in dataset.partitions.values() {
            if let Some((key, record)) = partition.iter().find(|(key, r)| **key != r.code) {
                return Err(RatesError::code_mismatch(key.as_str(), record.code.as_str()));
            }
        }
        Ok(dataset)
    }

    /// Returns the records quoted on `date`, in code order.
    ///
    /// # Errors
    ///
    /// Returns [`RatesError::PartitionNotFound`] if the date is unknown.
    pub fn partition(&self, date: NaiveDate) -> Result<Vec<CurrencyRecord>, RatesError> {
        self.partitions
            .get(&date)
            .map(|records| records.values().cloned().collect())
            .ok_or(RatesError::PartitionNotFound(date))
    }

    /// Returns the dates that have a partition, oldest first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.partitions.keys().copied()
    }
}

// ============================================================================
// Tests
// ============================================================================
