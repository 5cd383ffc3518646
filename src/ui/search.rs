//! Search box, quick picks and the status line under them.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::app::ui_state::SEARCH_PLACEHOLDER;
use crate::core::app::{App, Focus};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Rows used by [`render_search`].
pub const SEARCH_HEIGHT: u16 = 5;

pub fn quick_pick_line(app: &App) -> Line<'static> {
    let theme = &app.ui.theme;
    let key_style = if app.explorer.is_resolving_location {
        theme.future_year_style
    } else {
        theme.accent_style
    };
    let mut spans = Vec::new();
    for (index, pick) in app.ui.quick_picks.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{}", index + 1), key_style));
        spans.push(Span::styled(format!(" {pick}"), theme.muted_style));
    }
    Line::from(spans)
}

pub fn status_line(app: &App) -> Line<'static> {
    let theme = &app.ui.theme;
    if let Some(error) = &app.explorer.error_message {
        return Line::from(Span::styled(error.clone(), theme.error_style));
    }
    match &app.explorer.selected_location {
        Some(location) => Line::from(vec![
            Span::styled("TARGET REGION ", theme.muted_style),
            Span::styled(location.name.clone(), theme.heading_style),
        ]),
        None => Line::default(),
    }
}

fn locate_label(app: &App) -> String {
    if app.explorer.is_resolving_location {
        let frame = SPINNER[app.ui.spinner_frame % SPINNER.len()];
        format!(" {frame} LOCATING ")
    } else {
        " LOCATE ⏎ ".to_string()
    }
}

pub fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let focused = app.ui.focus == Focus::Search;
    let border_style = if focused && !app.explorer.is_resolving_location {
        theme.focus_border_style
    } else {
        theme.border_style
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(" ⌕ Search ", theme.muted_style))
        .title(
            Line::from(Span::styled(locate_label(app), theme.accent_style))
                .alignment(ratatui::layout::Alignment::Right),
        );
    let inner = block.inner(rows[0]);
    f.render_widget(block, rows[0]);

    if focused && !app.explorer.is_resolving_location {
        f.render_widget(app.ui.search_input(), inner);
    } else {
        let text = app.ui.search_text();
        let line = if text.is_empty() {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, theme.muted_style))
        } else {
            Line::from(Span::styled(text, theme.muted_style))
        };
        f.render_widget(Paragraph::new(line), inner);
    }

    f.render_widget(Paragraph::new(quick_pick_line(app)), rows[1]);
    f.render_widget(Paragraph::new(status_line(app)), rows[2]);
}
