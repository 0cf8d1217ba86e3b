//! Domain types for the lazyrates currency table.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for loading rate data
//! - [`currency`] - Currency records, trends and the date-partitioned dataset
//! - [`sort`] - Sort fields, directions and the record comparator
//! - [`history`] - Synthetic rate history derived from one record
//! - [`format`] - Date formatting and lenient number parsing

// ============================================================================
// Module Declarations
// ============================================================================

pub mod currency;
pub mod error;
pub mod format;
pub mod history;
pub mod sort;

// ============================================================================
// Re-exports
// ============================================================================

pub use currency::{CurrencyRecord, DatasetByDate, Trend};
pub use error::RatesError;
pub use format::{format_date, format_signed};
pub use history::{HISTORY_LEN, HistoricalPoint, chronological_values, generate_history, period_change};
pub use sort::{SortDirection, SortField, sort_records};
