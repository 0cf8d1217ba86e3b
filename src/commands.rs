//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into an [`AppCommand`] according to the current
//! [`InputContext`]; the state layer then executes the command. Mapping is a
//! pure function, which keeps keybindings testable in isolation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::SortField;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The rate partition is still loading.
    Loading,
    /// Browsing the rate table.
    Main,
    /// The last load failed.
    LoadFailed,
    /// The help popup is open.
    HelpPopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Reload the rate partition, resetting sort and selection.
    Refresh,
    /// Open or close the help popup.
    ToggleHelp,

    // === Table Navigation ===
    /// Move the cursor up one row.
    MoveUp,
    /// Move the cursor down one row.
    MoveDown,
    /// Jump to the first row.
    GoToTop,
    /// Jump to the last row.
    GoToBottom,
    /// Expand or collapse the row under the cursor.
    ToggleSelection,
    /// Collapse the expanded row.
    Collapse,

    // === Sorting ===
    /// Sort by a field, flipping direction if it is already active.
    SortBy(SortField),

    // === Detail Actions ===
    /// Export the expanded record's chart as SVG.
    ExportChart,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to an application command based on the current context.
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppCommand::Quit;
    }

    match context {
        InputContext::HelpPopup => map_help_keys(key),
        InputContext::Loading => map_loading_keys(key),
        InputContext::LoadFailed => map_failed_keys(key),
        InputContext::Main => map_main_keys(key),
    }
}

fn map_help_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => AppCommand::ToggleHelp,
        _ => AppCommand::Noop,
    }
}

fn map_loading_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::Quit,
        KeyCode::Char('?') => AppCommand::ToggleHelp,
        _ => AppCommand::Noop,
    }
}

fn map_failed_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::Quit,
        KeyCode::Char('r') | KeyCode::Enter => AppCommand::Refresh,
        KeyCode::Char('?') => AppCommand::ToggleHelp,
        _ => AppCommand::Noop,
    }
}

fn map_main_keys(key: KeyEvent) -> AppCommand {
    match key.code {
        KeyCode::Char('q') => AppCommand::Quit,
        KeyCode::Char('r') => AppCommand::Refresh,
        KeyCode::Char('?') => AppCommand::ToggleHelp,
        KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
        KeyCode::Home | KeyCode::Char('g') => AppCommand::GoToTop,
        KeyCode::End | KeyCode::Char('G') => AppCommand::GoToBottom,
        KeyCode::Enter | KeyCode::Char(' ') => AppCommand::ToggleSelection,
        KeyCode::Esc => AppCommand::Collapse,
        KeyCode::Char('1' | 'c') => AppCommand::SortBy(SortField::Code),
        KeyCode::Char('2' | 'n') => AppCommand::SortBy(SortField::Name),
        KeyCode::Char('3' | 'v') => AppCommand::SortBy(SortField::Rate),
        KeyCode::Char('4' | 'd') => AppCommand::SortBy(SortField::Delta),
        KeyCode::Char('5' | 'o') => AppCommand::SortBy(SortField::SortKey),
        KeyCode::Char('s') => AppCommand::ExportChart,
        _ => AppCommand::Noop,
    }
}

// ============================================================================
// Tests
// ============================================================================
