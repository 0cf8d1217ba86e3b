//! Error types for rate dataset operations.
//!
//! Parsing of rate and sort values never fails (it degrades to zero), so the
//! variants here cover only the fixture boundary: reading, decoding and
//! validating a dataset, and resolving the requested date partition.

use chrono::NaiveDate;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for loading currency rate data.
#[derive(Debug, Error)]
pub enum RatesError {
    /// The fixture file could not be read.
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture content is not valid dataset JSON.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The dataset holds no partition for the requested date.
    #[error("No rates available for {0}")]
    PartitionNotFound(NaiveDate),

    /// A partition key does not match the code stored in its record.
    #[error("Record keyed '{key}' carries currency code '{code}'")]
    CodeMismatch {
        /// The mapping key in the partition.
        key: String,
        /// The code found inside the record.
        code: String,
    },

    /// Invalid user input (e.g. a malformed date argument).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RatesError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new code mismatch error.
    #[must_use]
    pub fn code_mismatch(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self::CodeMismatch {
            key: key.into(),
            code: code.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

impl From<serde_json::Error> for RatesError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
