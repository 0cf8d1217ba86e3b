//! Detail panel of an expanded currency.
//!
//! Left: code badge, name, units, day and period change, then the six
//! history points newest first. Right: the history chart.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::chart::{CHART_HEIGHT, CHART_WIDTH, RasterSurface, draw_history_chart};
use crate::constants::QUOTE_SUFFIX;
use crate::domain::{
    CurrencyRecord, HistoricalPoint, Trend, chronological_values, format_date, format_signed,
    generate_history, period_change,
};
use crate::theme::{BORDER_STYLE, HEADER_STYLE, MUTED_COLOR, PRIMARY_COLOR, trend_color};

use super::components::RasterImage;

/// Chart background (Tokyo Night).
const CHART_BG: (u8, u8, u8) = (26, 27, 38);

/// Width of the info and history column.
const INFO_WIDTH: u16 = 44;

/// Renders the panel for `record` into `area`.
pub fn render(frame: &mut Frame, area: Rect, record: &CurrencyRecord) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::BOTTOM)
        .border_style(BORDER_STYLE);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let series = generate_history(record);
    let [info_area, chart_area] =
        Layout::horizontal([Constraint::Length(INFO_WIDTH), Constraint::Fill(1)])
            .spacing(2)
            .areas(inner);

    let [summary_area, history_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(info_area);

    frame.render_widget(Paragraph::new(summary_lines(record, &series)), summary_area);
    frame.render_widget(history_table(&series), history_area);
    render_chart(frame, chart_area, &series);
}

// ============================================================================
// Summary
// ============================================================================

fn change_spans(label: &str, value: f64) -> Vec<Span<'static>> {
    let style = Style::default().fg(trend_color(Trend::from_change(value)));
    vec![
        Span::styled(format!("{label}: "), Style::default().fg(MUTED_COLOR)),
        Span::styled(
            format!("{} {}", format_signed(value), Trend::from_change(value).glyph()),
            style,
        ),
    ]
}

fn summary_lines(record: &CurrencyRecord, series: &[HistoricalPoint]) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", record.code),
                Style::default()
                    .fg(Color::Black)
                    .bg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                record.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} {}", record.units_per_quote, record.code),
            Style::default().fg(MUTED_COLOR),
        )),
        Line::from(change_spans("Day change", record.delta)),
        Line::from(change_spans("Change over period", period_change(series))),
    ]
}

// ============================================================================
// History Table
// ============================================================================

fn history_table(series: &[HistoricalPoint]) -> Table<'static> {
    let rows = series.iter().enumerate().map(|(index, point)| {
        let trend_style = Style::default().fg(trend_color(point.trend));
        let row = Row::new(vec![
            Cell::from(format_date(point.date)),
            Cell::from(format!("{} {QUOTE_SUFFIX}", point.rate)),
            Cell::from(Line::from(vec![
                Span::styled(format_signed(point.change), trend_style),
                Span::raw(" "),
                Span::styled(point.trend.glyph(), trend_style),
            ])),
        ]);
        if index == 0 {
            row.style(Style::default().add_modifier(Modifier::BOLD))
        } else {
            row
        }
    });

    Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
    )
    .header(Row::new(vec!["Date", "Rate", "Change"]).style(HEADER_STYLE))
    .column_spacing(2)
}

// ============================================================================
// Chart
// ============================================================================

fn render_chart(frame: &mut Frame, area: Rect, series: &[HistoricalPoint]) {
    if area.is_empty() {
        return;
    }
    let mut surface = RasterSurface::new(CHART_WIDTH, CHART_HEIGHT);
    draw_history_chart(&mut surface, &chronological_values(series));

    let (r, g, b) = CHART_BG;
    frame.render_widget(RasterImage::new(&surface).background(r, g, b), area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DETAIL_HEIGHT;
    use crate::test_utils::{RecordMother, buffer_row, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(record: &CurrencyRecord) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, DETAIL_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), record))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_summary_lines() {
        let buffer = draw(&RecordMother::usd());

        assert!(buffer_row(&buffer, 0).contains(" USD  US Dollar"));
        assert!(buffer_row(&buffer, 1).contains("1 USD"));
        assert!(buffer_row(&buffer, 2).contains("Day change: +1.2 ↑"));
        assert!(buffer_row(&buffer, 3).contains("Change over period: -1.07 ↓"));
    }

    #[test]
    fn test_history_table_newest_first() {
        let buffer = draw(&RecordMother::usd());

        assert!(buffer_row(&buffer, 4).contains("Date"));
        let newest = buffer_row(&buffer, 5);
        assert!(newest.contains("03.03.2025"));
        assert!(newest.contains("505.50 ₸"));
        assert!(newest.contains("+1.2 ↑"));
        assert!(buffer[(2, 5)].modifier.contains(Modifier::BOLD));

        let second = buffer_row(&buffer, 6);
        assert!(second.contains("02.03.2025"));
        assert!(second.contains("508.77 ₸"));
        assert!(second.contains("+3.27 ↑"));
        assert!(!buffer[(2, 6)].modifier.contains(Modifier::BOLD));

        let oldest = buffer_row(&buffer, 10);
        assert!(oldest.contains("26.02.2025"));
        assert!(oldest.contains("-5.3 ↓"));
    }

    #[test]
    fn test_chart_is_drawn_with_line_color() {
        let buffer = draw(&RecordMother::usd());
        let content = buffer_to_string(&buffer);
        assert!(content.contains("▀"));

        // line, fill and markers tint the background blue
        let chart_x0 = 1 + INFO_WIDTH + 2;
        let tinted = (chart_x0..100).any(|x| {
            (0..DETAIL_HEIGHT - 1).any(|y| {
                let cell = &buffer[(x, y)];
                [cell.fg, cell.bg].into_iter().any(|color| match color {
                    Color::Rgb(r, _, b) => b > 80 && b > r,
                    _ => false,
                })
            })
        });
        assert!(tinted);

        let top_left = &buffer[(chart_x0, 0)];
        assert_eq!(top_left.fg, Color::Rgb(26, 27, 38));
    }

    #[test]
    fn test_render_in_tiny_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &RecordMother::usd()))
            .unwrap();
    }
}
