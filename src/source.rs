//! Rate data sources.
//!
//! The table only ever asks a source for one thing: the records quoted on a
//! given date. [`FixtureSource`] answers from a static dataset, either the
//! one bundled with the binary or a JSON file in the same layout.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::{CurrencyRecord, DatasetByDate, RatesError};

/// Dataset compiled into the binary.
const BUNDLED_FIXTURE: &str = include_str!("fixture.json");

/// Read access to date-partitioned rate data.
pub trait RateSource: fmt::Debug + Send + Sync {
    /// Loads the partition for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or holds no data for
    /// `date`.
    fn load_partition(&self, date: NaiveDate) -> Result<Vec<CurrencyRecord>, RatesError>;

    /// Short description for logs and the header bar.
    fn describe(&self) -> String;
}

/// Where a [`FixtureSource`] reads its dataset from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FixtureOrigin {
    Bundled,
    File(PathBuf),
}

/// Static fixture-backed rate source.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    origin: FixtureOrigin,
}

impl FixtureSource {
    /// Source backed by the bundled dataset.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            origin: FixtureOrigin::Bundled,
        }
    }

    /// Source backed by a JSON file, read on every load.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: FixtureOrigin::File(path.into()),
        }
    }

    /// Builds a source from an optional fixture path.
    #[must_use]
    pub fn from_option(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    fn read_dataset(&self) -> Result<DatasetByDate, RatesError> {
        match &self.origin {
            FixtureOrigin::Bundled => DatasetByDate::from_json(BUNDLED_FIXTURE),
            FixtureOrigin::File(path) => {
                let content = std::fs::read_to_string(path)?;
                DatasetByDate::from_json(&content)
            }
        }
    }
}

impl RateSource for FixtureSource {
    fn load_partition(&self, date: NaiveDate) -> Result<Vec<CurrencyRecord>, RatesError> {
        let dataset = self.read_dataset()?;
        let records = dataset.partition(date).inspect_err(|_| {
            let known: Vec<_> = dataset.dates().map(|d| d.to_string()).collect();
            tracing::debug!("No partition for {date}; dataset has {}", known.join(", "));
        })?;
        tracing::debug!("Loaded {} records for {date} from {}", records.len(), self.describe());
        Ok(records)
    }

    fn describe(&self) -> String {
        match &self.origin {
            FixtureOrigin::Bundled => "bundled fixture".to_string(),
            FixtureOrigin::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bundled_fixture_has_default_partition() {
        let records = FixtureSource::bundled()
            .load_partition(ymd(2025, 3, 3))
            .unwrap();
        assert_eq!(records.len(), 15);
        assert!(records.iter().all(|r| r.date == ymd(2025, 3, 3)));
        assert!(records.iter().any(|r| r.code == "USD"));
    }

    #[test]
    fn test_bundled_fixture_codes_are_unique() {
        let records = FixtureSource::bundled()
            .load_partition(ymd(2025, 3, 4))
            .unwrap();
        let mut codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
        codes.dedup();
        assert_eq!(codes.len(), records.len());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FixtureSource::from_path("/nonexistent/lazyrates/fixture.json");
        let err = source.load_partition(ymd(2025, 3, 3)).unwrap_err();
        assert!(matches!(err, RatesError::Io(_)));
    }

    #[test]
    fn test_file_source_reads_json() {
        let path = std::env::temp_dir().join(format!(
            "lazyrates_fixture_test_{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"2025-03-05": {"KZT": {"currency": "KZT", "date": "2025-03-05", "delta": 0,
                "index": "SAME", "name": "Tenge", "quant": "1", "sort": "1", "value": "1"}}}"#,
        )
        .unwrap();

        let source = FixtureSource::from_path(&path);
        let records = source.load_partition(ymd(2025, 3, 5)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Tenge");
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn test_from_option_defaults_to_bundled() {
        assert_eq!(FixtureSource::from_option(None).describe(), "bundled fixture");
    }
}
