//! State management module for the lazyrates TUI application.
//!
//! The state is split into:
//!
//! - [`TableState`] - Records, load status, sort order, expanded row, cursor
//! - [`UiState`] - Help popup and toasts
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                   App                    │
//! ├─────────────────────┬────────────────────┤
//! │     TableState      │      UiState       │
//! │  - records          │  - help popup      │
//! │  - load state       │  - toasts          │
//! │  - sort / selection │                    │
//! └─────────────────────┴────────────────────┘
//! ```
//!
//! Loading runs on a spawned task that reports back through
//! [`AppMessage`]; everything else happens on the event loop.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::domain::{CurrencyRecord, RatesError};
use crate::source::RateSource;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod table;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use table::{LoadState, TableLine, TableState};
pub use ui_state::UiState;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A partition load finished.
    PartitionLoaded {
        /// Load generation the result belongs to.
        generation: u64,
        /// Loaded records or the failure.
        result: Result<Vec<CurrencyRecord>, RatesError>,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Table state - records, sort, selection, cursor.
    pub table: TableState,

    /// UI state - help popup, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Quotation date whose partition is shown.
    pub date: NaiveDate,

    /// Simulated delay before a load completes.
    pub load_delay: Duration,

    /// Whether the application should exit.
    pub exit: bool,

    /// Last known terminal area, used for mouse hit testing and scrolling.
    pub(crate) terminal_area: Rect,

    /// Generation of the most recent load; older results are dropped.
    pub(crate) generation: u64,

    /// Where records come from.
    pub(crate) source: Arc<dyn RateSource>,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver is gone only
    // during shutdown.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// Chart export
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
