//! Layout calculations for the lazyrates TUI
//!
//! Rendering and mouse hit testing both go through these functions so a
//! click always lands on what was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, TABLE_HEADER_HEIGHT};
use crate::domain::SortField;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title, caption and refresh hint
    pub header: Rect,
    /// Bordered table block
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

/// Areas inside the table block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Column header row
    pub header_row: Rect,
    /// Rows and the detail panel
    pub body: Rect,
}

// ============================================================================
// Columns
// ============================================================================

/// Table columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Code,
    Name,
    Units,
    Rate,
    Change,
}

impl Column {
    pub const ALL: [Self; 5] = [Self::Code, Self::Name, Self::Units, Self::Rate, Self::Change];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Name => "Currency",
            Self::Units => "Units",
            Self::Rate => "Rate",
            Self::Change => "Change",
        }
    }

    /// Field this column sorts by; `None` for the units column.
    #[must_use]
    pub const fn sort_field(self) -> Option<SortField> {
        match self {
            Self::Code => Some(SortField::Code),
            Self::Name => Some(SortField::Name),
            Self::Units => None,
            Self::Rate => Some(SortField::Rate),
            Self::Change => Some(SortField::Delta),
        }
    }
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate the header row and body inside the bordered table block
#[must_use]
pub fn calculate_table_layout(main: Rect) -> TableLayout {
    let inner = main.inner(Margin::new(1, 1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TABLE_HEADER_HEIGHT), Constraint::Min(0)])
        .split(inner);

    TableLayout {
        header_row: chunks[0],
        body: chunks[1],
    }
}

/// Body of the table for a full terminal area.
#[must_use]
pub fn table_body(area: Rect) -> Rect {
    calculate_table_layout(calculate_app_layout(area).main).body
}

/// Splits one table row into column cells.
#[must_use]
pub fn column_areas(row: Rect) -> [Rect; 5] {
    Layout::horizontal([
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(12),
        Constraint::Length(14),
    ])
    .spacing(1)
    .areas(row)
}

/// Column under a horizontal position of a row.
#[must_use]
pub fn column_at(row: Rect, x: u16) -> Option<Column> {
    let areas = column_areas(row);
    Column::ALL
        .into_iter()
        .zip(areas)
        .find(|(_, area)| area.contains(Position::new(x, area.y)))
        .map(|(column, _)| column)
}

/// Calculate a centered popup area within a parent area
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
