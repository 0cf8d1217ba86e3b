//! UI rendering module for the lazyrates TUI.
//!
//! # Module Structure
//!
//! - `table` - Currency table, skeleton and failure views
//! - `detail` - Detail panel of the expanded row, including the chart
//! - `popups` - Modal dialogs (help)
//! - `components` - Reusable UI components (toast, raster image)
//! - `layout` - Layout calculations shared with mouse hit testing
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod detail;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;
pub mod table;

use ratatui::Frame;

use crate::state::App;

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws header, table and footer, then the help popup and toast overlays.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, app);
    table::render(frame, layout.main, app);
    footer::render(frame, layout.footer, app);

    if app.ui.show_help {
        popups::help::render(frame, size);
    }

    // Toast on top of everything (non-blocking overlay)
    if let Some(message) = app.ui.toast_message() {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================
