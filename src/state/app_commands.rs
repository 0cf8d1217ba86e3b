//! Command execution and input handling for the lazyrates application.
//!
//! Keyboard input is mapped to an [`AppCommand`] for the current
//! [`InputContext`] and executed here. Mouse clicks are hit-tested against
//! the same layout the renderer uses.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::{App, LoadState, TableLine};
use crate::commands::{AppCommand, InputContext, map_key};
use crate::ui::layout::{calculate_app_layout, calculate_table_layout, column_at};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }

        match self.table.load_state {
            LoadState::Loading => InputContext::Loading,
            LoadState::Failed { .. } => InputContext::LoadFailed,
            LoadState::Ready => InputContext::Main,
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.refresh();
            }
            AppCommand::ToggleHelp => {
                self.ui.toggle_help();
            }

            // === Table Navigation ===
            AppCommand::MoveUp => {
                self.table.move_cursor_up();
            }
            AppCommand::MoveDown => {
                self.table.move_cursor_down();
            }
            AppCommand::GoToTop => {
                self.table.go_to_top();
            }
            AppCommand::GoToBottom => {
                self.table.go_to_bottom();
            }
            AppCommand::ToggleSelection => {
                self.table.toggle_cursor_selection();
                tracing::debug!("Selection: {:?}", self.table.selected_code);
            }
            AppCommand::Collapse => {
                self.table.collapse();
            }

            // === Sorting ===
            AppCommand::SortBy(field) => {
                self.table.set_sort_field(field);
                tracing::debug!(
                    "Sorted by {} {:?}",
                    self.table.sort_field,
                    self.table.sort_direction
                );
            }

            // === Detail Actions ===
            AppCommand::ExportChart => {
                self.export_selected_chart();
            }

            AppCommand::Noop => {}
        }

        self.keep_cursor_visible();
    }

    // ========================================================================
    // Mouse Handling
    // ========================================================================

    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                if self.get_input_context() == InputContext::Main {
                    self.execute_command(AppCommand::MoveUp);
                }
            }
            MouseEventKind::ScrollDown => {
                if self.get_input_context() == InputContext::Main {
                    self.execute_command(AppCommand::MoveDown);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_mouse_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Handles a left click at terminal cell `(column, row)`.
    pub(crate) fn handle_mouse_click(&mut self, column: u16, row: u16) {
        match self.get_input_context() {
            InputContext::HelpPopup => {
                self.ui.toggle_help();
                return;
            }
            InputContext::Main => {}
            InputContext::Loading | InputContext::LoadFailed => return,
        }

        let layout = calculate_table_layout(calculate_app_layout(self.terminal_area).main);
        let position = Position::new(column, row);

        if layout.header_row.contains(position) {
            if let Some(field) = column_at(layout.header_row, column).and_then(|c| c.sort_field()) {
                self.execute_command(AppCommand::SortBy(field));
            }
            return;
        }

        if layout.body.contains(position) {
            let offset = row - layout.body.y;
            if let Some(TableLine::Row(index)) = self.table.line_at(offset, layout.body.height) {
                self.table.set_cursor(index);
                self.execute_command(AppCommand::ToggleSelection);
            }
        }
    }
}
