//! Help popup showing all keybindings organized by context.
//!
//! Activated by `?`, closed by Esc/q/? or a click.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Keybinding Data
// ============================================================================

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global Keys",
        &[
            ("q", "Quit application"),
            ("r", "Reload rates (resets sort and selection)"),
            ("?", "Toggle help"),
        ],
    ),
    (
        "Table",
        &[
            ("↑ / k", "Move up"),
            ("↓ / j", "Move down"),
            ("g / G", "Go to top / bottom"),
            ("Enter/Space", "Expand or collapse row"),
            ("Esc", "Collapse row"),
            ("s", "Export chart as SVG"),
        ],
    ),
    (
        "Sorting",
        &[
            ("1 / c", "Sort by code"),
            ("2 / n", "Sort by name"),
            ("3 / v", "Sort by rate"),
            ("4 / d", "Sort by change"),
            ("5 / o", "Default order"),
            ("click", "Sort by column header"),
        ],
    ),
];

/// Lines of the help text, sections separated by a rule of `width`.
fn help_lines(width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (section_title, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            *section_title,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("─".repeat(usize::from(width))));

        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<14}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }

        lines.push(Line::raw(""));
    }
    lines.pop();
    lines
}

// ============================================================================
// Public API
// ============================================================================

/// Renders the centered help popup.
pub fn render(frame: &mut Frame, area: Rect) {
    let width = 60.min(area.width);
    let height = (help_lines(0).len() as u16 + 2).min(area.height);
    let popup_area = centered_popup_area(area, width, height);

    frame.render_widget(Clear, popup_area);

    let block =
        create_popup_block("Help (? to close)").border_style(Style::default().fg(ACCENT_COLOR));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    frame.render_widget(
        Paragraph::new(help_lines(inner.width.saturating_sub(2))),
        inner,
    );
}

// ============================================================================
// Tests
// ============================================================================
