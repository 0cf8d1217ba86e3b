//! Application constants for the lazyrates TUI.
//!
//! Centralized values for layout dimensions, timing and display symbols.

use std::time::Duration;

use chrono::NaiveDate;

// ============================================================================
// Data Defaults
// ============================================================================

/// Quotation date shown when neither config nor CLI picks one.
pub const DEFAULT_DATE: &str = "2025-03-03";

/// Simulated delay before the fixture partition is published.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 500;

/// Currency the rates are quoted in.
pub const QUOTE_SUFFIX: &str = "₸";

/// Parses [`DEFAULT_DATE`].
#[must_use]
pub fn default_date() -> NaiveDate {
    DEFAULT_DATE.parse().unwrap_or_default()
}

// ============================================================================
// Timing
// ============================================================================

/// Event loop tick; also the redraw cadence.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Ticks a toast stays on screen.
pub const TOAST_TICKS: u8 = 30;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the title/header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer hint bar.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the table column header row.
pub const TABLE_HEADER_HEIGHT: u16 = 1;

/// Rows occupied by an expanded detail panel.
pub const DETAIL_HEIGHT: u16 = 14;

/// Number of skeleton rows drawn while loading.
pub const SKELETON_ROWS: usize = 5;

// ============================================================================
// Display Symbols
// ============================================================================

/// Chevron on a collapsed row.
pub const COLLAPSED_SYMBOL: &str = "▾";

/// Chevron on an expanded row.
pub const EXPANDED_SYMBOL: &str = "▴";

/// Cursor marker in front of the highlighted row.
pub const CURSOR_SYMBOL: &str = "▶";
