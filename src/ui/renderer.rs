use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::core::app::{App, Focus};
use crate::core::news::AppMode;
use crate::ui::map::render_map;
use crate::ui::news::render_news;
use crate::ui::search::{render_search, SEARCH_HEIGHT};
use crate::ui::year_strip::render_year_strip;

/// Below this width the map stacks above the news panel.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;
const STACKED_MAP_HEIGHT: u16 = 12;
const YEAR_STRIP_HEIGHT: u16 = 3;

pub fn ui(f: &mut Frame, app: &App) {
    let background = Block::default().style(Style::default().bg(app.ui.theme.background_color));
    f.render_widget(background, f.area());

    match app.explorer.mode {
        AppMode::Landing => render_landing(f, f.area(), app),
        AppMode::Exploring => render_exploring(f, f.area(), app),
    }
}

pub fn landing_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.ui.theme;
    vec![
        Line::from(Span::styled("◎", theme.accent_style)),
        Line::default(),
        Line::from(Span::styled("B E A C O N", theme.heading_style)),
        Line::from(Span::styled(
            "SYNTHETIC INTELLIGENCE ARCHIVE",
            theme.muted_style,
        )),
        Line::default(),
        Line::from(Span::styled(
            "\"Powered by Gemini AI, Beacon recreates the global landscape of hope.",
            theme.text_style,
        )),
        Line::from(Span::styled(
            "Every dispatch is a synthetic recovery of verified positive history.\"",
            theme.text_style,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[ Enter ] ", theme.accent_style),
            Span::styled("BEGIN EXPLORATION →", theme.accent_style),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Neural Logic  │  Global Data  │  Hope Curated",
            theme.muted_style,
        )),
    ]
}

fn render_landing(f: &mut Frame, area: Rect, app: &App) {
    let lines = landing_lines(app);
    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[1],
    );

    let footer = format!(
        "beacon v{}  •  Enter explore  •  q quit",
        env!("CARGO_PKG_VERSION")
    );
    f.render_widget(
        Paragraph::new(Span::styled(footer, app.ui.theme.muted_style))
            .alignment(Alignment::Center),
        rows[3],
    );
}

fn header_line(app: &App, width: u16) -> Line<'static> {
    let theme = &app.ui.theme;
    let hint = match app.ui.focus {
        Focus::Search => "Enter locate · 1-9 quick pick · Tab next",
        Focus::Years => "←/→ year · Home/End · Tab next",
        Focus::Map => "arrows aim (Shift ×10) · Enter pin · Tab next",
    };
    let left = "‹ Esc Exit";
    let title = "Beacon";
    let used = left.chars().count() + title.chars().count() + hint.chars().count();
    let spare = (width as usize).saturating_sub(used);
    let gap_left = spare / 2;
    let gap_right = spare - gap_left;
    Line::from(vec![
        Span::styled(left, theme.muted_style),
        Span::raw(" ".repeat(gap_left)),
        Span::styled(title, theme.heading_style),
        Span::raw(" ".repeat(gap_right)),
        Span::styled(hint, theme.muted_style),
    ])
}

fn render_exploring(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(YEAR_STRIP_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(Paragraph::new(header_line(app, rows[0].width)), rows[0]);
    render_search(f, rows[1], app);
    render_year_strip(f, rows[2], app);

    let body = rows[3];
    if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body);
        render_map(f, columns[0], app);
        render_news(f, columns[1], app);
    } else {
        let stacked = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(STACKED_MAP_HEIGHT), Constraint::Min(0)])
            .split(body);
        render_map(f, stacked[0], app);
        render_news(f, stacked[1], app);
    }
}
