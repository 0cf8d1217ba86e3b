//! Theme and styling constants for the lazyrates TUI.
//!
//! Tokyo Night-inspired colors and consistent styling.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Trend;

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Rising rates.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Falling rates and errors.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for special highlights.
pub const ACCENT_COLOR: Color = Color::Magenta;

/// Skeleton placeholder blocks.
pub const SKELETON_COLOR: Color = Color::Rgb(59, 66, 97);

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the row under the cursor.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Style for table column headers.
pub const HEADER_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);

/// Returns the color used for a trend.
#[must_use]
pub const fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => SUCCESS_COLOR,
        Trend::Down => ERROR_COLOR,
        Trend::Same => MUTED_COLOR,
    }
}
