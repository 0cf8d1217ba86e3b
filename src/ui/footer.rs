//! Footer rendering module for the lazyrates TUI.
//!
//! Keyboard hints for the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(footer_text(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

const fn footer_text(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => {
            "q:Quit  r:Refresh  ↑↓:Move  Enter:Expand  1-5:Sort  s:Export  ?:Help"
        }
        InputContext::Loading => "q:Quit  ?:Help",
        InputContext::LoadFailed => "q:Quit  r:Retry  ?:Help",
        InputContext::HelpPopup => "Esc:Close help",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AppMother, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_footer_displays_main_shortcuts() {
        let app = AppMother::ready(Rect::new(0, 0, 80, 20));
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        for shortcut in ["q:Quit", "r:Refresh", "1-5:Sort", "s:Export", "?:Help"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_footer_text_per_context() {
        insta::assert_snapshot!(footer_text(InputContext::LoadFailed), @"q:Quit  r:Retry  ?:Help");
        assert!(!footer_text(InputContext::Loading).contains("Refresh"));
    }

    #[test]
    fn test_footer_zero_height_does_not_panic() {
        let app = AppMother::loading(Rect::new(0, 0, 80, 20));
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 0), &app))
            .unwrap();
    }
}
