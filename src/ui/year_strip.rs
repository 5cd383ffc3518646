//! Horizontal year selector, newest year first.

use std::ops::Range;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::app::{clamp_year, App, Focus, FIRST_YEAR, LAST_YEAR};

/// Columns taken by one year cell, e.g. ` 2025 `.
pub const CELL_WIDTH: u16 = 6;

pub fn year_count() -> usize {
    (LAST_YEAR - FIRST_YEAR + 1) as usize
}

/// Years in display order.
pub fn strip_years() -> impl DoubleEndedIterator<Item = i32> {
    (FIRST_YEAR..=LAST_YEAR).rev()
}

pub fn year_index(year: i32) -> usize {
    (LAST_YEAR - clamp_year(year)) as usize
}

/// Slice of the strip that keeps `selected` centred, pinned at both ends.
pub fn visible_window(selected: usize, total: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.min(total);
    if capacity == 0 {
        return 0..0;
    }
    let start = selected
        .saturating_sub(capacity / 2)
        .min(total - capacity);
    start..start + capacity
}

pub fn build_strip_line(app: &App, width: u16) -> Line<'static> {
    let theme = &app.ui.theme;
    let selected_year = app.explorer.selected_year;
    let capacity = (width / CELL_WIDTH) as usize;
    let window = visible_window(year_index(selected_year), year_count(), capacity);

    let spans: Vec<Span<'static>> = strip_years()
        .skip(window.start)
        .take(window.len())
        .map(|year| {
            if year == selected_year {
                Span::styled(format!("‹{year}›"), theme.accent_style)
            } else if app.is_future_year(year) {
                Span::styled(format!(" {year} "), theme.future_year_style)
            } else {
                Span::styled(format!(" {year} "), theme.muted_style)
            }
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_year_strip(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui.theme;
    let border_style = if app.ui.focus == Focus::Years {
        theme.focus_border_style
    } else {
        theme.border_style
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(" Temporal Window ", theme.muted_style))
        .title(
            Line::from(Span::styled(
                format!(" {} ", app.explorer.selected_year),
                theme.heading_style,
            ))
            .alignment(Alignment::Right),
        );
    let inner = block.inner(area);
    let line = build_strip_line(app, inner.width);
    f.render_widget(Paragraph::new(line).block(block), area);
}
