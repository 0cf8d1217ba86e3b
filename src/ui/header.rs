//! Header rendering for the lazyrates TUI
//!
//! Title, the quotation date caption and the refresh hint.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::format_date;
use crate::state::App;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled(
            " Currency rates ",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Rates for {}", format_date(app.date)),
            Style::default().fg(MUTED_COLOR),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), inner);

    let hint = refresh_hint(app);
    let hint_width = (hint.width() as u16).min(inner.width);
    let hint_area = Rect::new(
        inner.right().saturating_sub(hint_width + 1),
        inner.y,
        hint_width,
        1,
    );
    frame.render_widget(Paragraph::new(hint), hint_area);
}

fn refresh_hint(app: &App) -> Line<'static> {
    if app.table.loading() {
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(WARNING_COLOR),
        ))
    } else {
        Line::from(vec![
            Span::styled("[r]", Style::default().fg(PRIMARY_COLOR)),
            Span::styled(" Refresh", Style::default().fg(MUTED_COLOR)),
        ])
    }
}
