//! Currency table rendering.
//!
//! Draws the column header with sort indicators, the rows in the current
//! sort order and, right below the expanded row, its detail panel. While
//! loading a skeleton grid stands in for the data.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::constants::{
    COLLAPSED_SYMBOL, CURSOR_SYMBOL, EXPANDED_SYMBOL, SKELETON_ROWS,
};
use crate::domain::{CurrencyRecord, SortDirection, SortField, format_signed};
use crate::state::{App, LoadState, TableLine, TableState};
use crate::theme::{
    ERROR_COLOR, HEADER_STYLE, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, SKELETON_COLOR,
    trend_color,
};

use super::detail;
use super::helpers::create_border_block;
use super::layout::{Column, calculate_table_layout, column_areas};

// ============================================================================
// Public API
// ============================================================================

/// Renders the table block into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.table.load_state {
        LoadState::Ready => format!("Rates ({})", app.table.records.len()),
        _ => "Rates".to_string(),
    };
    frame.render_widget(create_border_block(&title, true), area);

    let layout = calculate_table_layout(area);
    match &app.table.load_state {
        LoadState::Loading => render_skeleton(frame, layout.header_row, layout.body),
        LoadState::Failed { reason } => render_failure(frame, layout.body, reason),
        LoadState::Ready => {
            render_header_row(frame, layout.header_row, &app.table);
            render_body(frame, layout.body, &app.table);
        }
    }
}

// ============================================================================
// Header
// ============================================================================

/// Sort indicator for a column: `↑`/`↓` on the active field, a dimmed `↓`
/// on other sortable columns, nothing on the units column.
fn sort_indicator(column: Column, table: &TableState) -> Option<Span<'static>> {
    let field = column.sort_field()?;
    if field == table.sort_field {
        let arrow = match table.sort_direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        };
        Some(Span::styled(
            arrow,
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Some(Span::styled(
            "↓",
            Style::default().fg(MUTED_COLOR).add_modifier(Modifier::DIM),
        ))
    }
}

fn render_header_row(frame: &mut Frame, row: Rect, table: &TableState) {
    for (column, cell) in Column::ALL.into_iter().zip(column_areas(row)) {
        let mut spans = vec![Span::styled(column.title(), HEADER_STYLE)];
        if let Some(indicator) = sort_indicator(column, table) {
            spans.push(Span::raw(" "));
            spans.push(indicator);
        }
        let line = Line::from(spans).alignment(column_alignment(column));
        frame.render_widget(Paragraph::new(line), cell);
    }
}

const fn column_alignment(column: Column) -> Alignment {
    match column {
        Column::Rate | Column::Change => Alignment::Right,
        _ => Alignment::Left,
    }
}

// ============================================================================
// Body
// ============================================================================

fn render_body(frame: &mut Frame, body: Rect, table: &TableState) {
    let records = table.sorted_records();
    if records.is_empty() {
        let empty = Paragraph::new("No rates for this date")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(empty, body);
        return;
    }

    for placed in table.visible_lines(body.height) {
        let area = Rect::new(body.x, body.y + placed.offset, body.width, placed.height);
        match placed.line {
            TableLine::Row(index) => {
                let record = &records[index];
                let expanded = table.selected_code.as_deref() == Some(record.code.as_str());
                render_row(frame, area, record, index == table.cursor, expanded);
            }
            TableLine::Detail(index) => {
                detail::render(frame, area, &records[index]);
            }
        }
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    record: &CurrencyRecord,
    highlighted: bool,
    expanded: bool,
) {
    if highlighted {
        frame.buffer_mut().set_style(area, SELECTED_STYLE);
    }

    let marker = if highlighted { CURSOR_SYMBOL } else { " " };
    let chevron = if expanded { EXPANDED_SYMBOL } else { COLLAPSED_SYMBOL };
    let trend_style = Style::default().fg(trend_color(record.trend));

    let cells = [
        Line::from(vec![
            Span::styled(marker, Style::default().fg(PRIMARY_COLOR)),
            Span::raw(" "),
            Span::styled(
                record.code.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(chevron, Style::default().fg(MUTED_COLOR)),
        ]),
        Line::from(record.name.clone()),
        Line::from(Span::styled(
            record.units_per_quote.clone(),
            Style::default().fg(MUTED_COLOR),
        )),
        Line::from(record.rate.clone()),
        Line::from(vec![
            Span::styled(format_signed(record.delta), trend_style),
            Span::raw(" "),
            Span::styled(record.trend.glyph(), trend_style),
        ]),
    ];

    for ((column, cell), line) in Column::ALL.into_iter().zip(column_areas(area)).zip(cells) {
        let line = line.alignment(column_alignment(column));
        frame.render_widget(Paragraph::new(line), cell);
    }
}

// ============================================================================
// Loading / Failure
// ============================================================================

/// Placeholder bar filling `percent` of a cell.
fn skeleton_bar(width: u16, percent: u16) -> Span<'static> {
    let len = (width * percent / 100).max(1);
    Span::styled(
        " ".repeat(usize::from(len)),
        Style::default().bg(SKELETON_COLOR),
    )
}

fn render_skeleton(frame: &mut Frame, header_row: Rect, body: Rect) {
    for cell in column_areas(header_row) {
        frame.render_widget(Paragraph::new(Line::from(skeleton_bar(cell.width, 50))), cell);
    }

    // Every other line, so the grid reads as rows
    for index in 0..SKELETON_ROWS as u16 {
        let y = body.y + index * 2;
        if y >= body.bottom() {
            break;
        }
        let row = Rect::new(body.x, y, body.width, 1);
        for (column, cell) in column_areas(row).into_iter().enumerate() {
            let percent = 60 + ((column as u16 + index) % 3) * 15;
            frame.render_widget(
                Paragraph::new(Line::from(skeleton_bar(cell.width, percent))),
                cell,
            );
        }
    }
}

fn render_failure(frame: &mut Frame, body: Rect, reason: &str) {
    let text = vec![
        Line::from(Span::styled(
            "Could not load rates",
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(reason.to_string(), Style::default().fg(Color::White))),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[r]", Style::default().fg(PRIMARY_COLOR)),
            Span::styled(" Retry", Style::default().fg(MUTED_COLOR)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AppMother, buffer_row, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    const AREA: Rect = Rect::new(0, 0, 90, 40);

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_header_row_indicators() {
        let app = AppMother::ready(AREA);
        let header = buffer_row(&draw(&app), 1);

        // default order is active but has no column, so every arrow is dimmed ↓
        assert!(header.contains("Code ↓"));
        assert!(header.contains("Currency ↓"));
        assert!(header.contains("Rate ↓"));
        assert!(header.contains("Change ↓"));
        assert!(header.contains("Units"));
        assert!(!header.contains("Units ↓"));
    }

    #[test]
    fn test_active_sort_column_shows_direction() {
        let mut app = AppMother::ready(AREA);
        app.table.set_sort_field(SortField::Rate);
        assert!(buffer_row(&draw(&app), 1).contains("Rate ↑"));

        app.table.set_sort_field(SortField::Rate);
        let buffer = draw(&app);
        let header = buffer_row(&buffer, 1);
        assert!(header.contains("Rate ↓"));
        // highest rate first
        assert!(buffer_row(&buffer, 2).contains("XAU"));
    }

    #[test]
    fn test_rows_follow_sort_order_with_cursor_marker() {
        let app = AppMother::ready(AREA);
        let buffer = draw(&app);

        let first = buffer_row(&buffer, 2);
        assert!(first.contains("▶ USD ▾"));
        assert!(first.contains("497.43"));
        let second = buffer_row(&buffer, 3);
        assert!(second.contains("  EUR ▾"));
    }

    #[test]
    fn test_delta_cell_is_signed_and_colored() {
        let app = AppMother::ready(AREA);
        let buffer = draw(&app);
        let record = app.table.sorted_records().remove(0);

        let row = buffer_row(&buffer, 2);
        let expected = format!("{} {}", format_signed(record.delta), record.trend.glyph());
        assert!(row.contains(&expected), "row: {row}");

        let x = row
            .chars()
            .position(|c| c.to_string() == record.trend.glyph())
            .unwrap() as u16;
        assert_eq!(buffer[(x, 2)].fg, trend_color(record.trend));
    }

    #[test]
    fn test_expanded_row_is_followed_by_detail() {
        let mut app = AppMother::ready(AREA);
        app.table.toggle_selection("EUR");
        let buffer = draw(&app);

        assert!(buffer_row(&buffer, 3).contains("EUR ▴"));
        let detail = buffer_to_string(&buffer);
        assert!(detail.contains("Change over period"));
        // next record comes after the panel
        assert!(buffer_row(&buffer, 4 + crate::constants::DETAIL_HEIGHT).contains("RUB ▾"));
    }

    #[test]
    fn test_loading_draws_skeleton_only() {
        let app = AppMother::loading(AREA);
        let buffer = draw(&app);
        let content = buffer_to_string(&buffer);

        assert!(!content.contains("USD"));
        assert!(!content.contains("Code"));
        assert_eq!(buffer[(2, 2)].bg, SKELETON_COLOR);
        assert_eq!(buffer[(2, 3)].bg, Color::Reset);
    }

    #[test]
    fn test_failure_shows_reason_and_retry() {
        let mut app = AppMother::loading(AREA);
        app.table.fail_load("No rates available for 2025-03-09");
        let content = buffer_to_string(&draw(&app));

        assert!(content.contains("Could not load rates"));
        assert!(content.contains("No rates available for 2025-03-09"));
        assert!(content.contains("[r] Retry"));
    }

    #[test]
    fn test_empty_partition_message() {
        let mut app = AppMother::loading(AREA);
        app.table.finish_load(Vec::new());
        assert!(buffer_to_string(&draw(&app)).contains("No rates for this date"));
    }
}
