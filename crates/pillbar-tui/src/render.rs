//! Pure render functions for the demo.
//!
//! Rendering never mutates application state, with one deliberate exception:
//! the pill row's observation cells. Render is the only place that knows the
//! row's inner width and the painted counter width, so it records both there
//! and the next frame's update folds them into the fit.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::pills;
use crate::state::AppState;

/// Height of the bordered pill-row pane.
const PILL_ROW_HEIGHT: u16 = 3;

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire demo to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PILL_ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    render_pill_row(app, frame, chunks[0]);
    render_catalog(app, frame, chunks[1]);
    render_status_line(app, frame, chunks[2]);
}

fn render_pill_row(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" selection ");
    let inner = block.inner(area);

    // Record observed geometry for the next frame's recompute.
    app.row.container_cell().set(inner.width);
    let counter_width = pills::suffix_text(app.row.hidden())
        .map_or(0, |s| UnicodeWidthStr::width(s.as_str()) as u16);
    app.row.suffix_cell().set(counter_width);

    let line = pills::row_line(&app.row, inner.width);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_catalog(app: &AppState, frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" catalog ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.catalog.is_empty() || inner.height == 0 {
        return;
    }

    let (start, rows) = catalog_window(app.cursor, app.catalog.len(), inner.height as usize);
    let lines: Vec<Line> = app
        .catalog
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(i, entry)| {
            let cursor = if i == app.cursor { "❯ " } else { "  " };
            let marker = if app.row.contains_value(&entry.value) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if i == app.cursor {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(cursor),
                Span::styled(format!("{marker} {}", entry.label), style),
                Span::styled(
                    format!("  ({})", entry.value),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let shown = app.row.shown();
    let total = app.row.options().len();

    let spans = vec![
        Span::styled(
            format!(" {shown}/{total} shown"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("width {}", app.row.width()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled("Space", Style::default().fg(Color::DarkGray)),
        Span::raw(" toggle  "),
        Span::styled("w", Style::default().fg(Color::DarkGray)),
        Span::raw(" width  "),
        Span::styled("q", Style::default().fg(Color::DarkGray)),
        Span::raw(" quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Window of catalog rows to render, anchored so the cursor sits mid-list
/// once scrolling starts.
fn catalog_window(cursor: usize, count: usize, max_rows: usize) -> (usize, usize) {
    if count == 0 || max_rows == 0 {
        return (0, 0);
    }
    let rows = max_rows.min(count);
    let start = cursor.saturating_sub(rows / 2).min(count - rows);
    (start, rows)
}
