//! News panel: which state to show, and the card layout for dispatches.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::app::{App, ExplorerState};
use crate::core::news::NewsItem;
use crate::ui::theme::Theme;
use crate::utils::text::{truncate_to_width, wrap_words};

pub const AWAITING_TEXT: &str = "Awaiting coordinates. Search for a place or pin one on the map.";
pub const LOADING_TEXT: &str = "Scanning Historical Threads...";
pub const EMPTY_TEXT: &str = "No positive dispatches found for this era.";
pub const FOOTER_TEXT: &str = "Neural Synthesis Engine";

const SPINNER: [&str; 4] = ["✦", "✧", "✶", "✧"];
const SKELETON_CARDS: usize = 2;

pub fn uncharted_text(year: i32) -> String {
    format!("The year {year} remains uncharted in our neural archives.")
}

/// What the panel shows, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NewsView<'a> {
    AwaitingCoordinates,
    Uncharted { year: i32 },
    Loading,
    Error(&'a str),
    Dispatches(&'a [NewsItem]),
    Empty,
}

impl<'a> NewsView<'a> {
    pub fn classify(explorer: &'a ExplorerState, current_year: i32) -> Self {
        if explorer.selected_location.is_none() {
            return NewsView::AwaitingCoordinates;
        }
        if explorer.selected_year > current_year {
            return NewsView::Uncharted {
                year: explorer.selected_year,
            };
        }
        if explorer.is_loading {
            return NewsView::Loading;
        }
        if let Some(error) = explorer.error_message.as_deref() {
            return NewsView::Error(error);
        }
        if !explorer.news.is_empty() {
            return NewsView::Dispatches(&explorer.news);
        }
        NewsView::Empty
    }
}

/// One card: tag row, title, summary, then a `Ref:` line per source.
pub fn build_card_lines(item: &NewsItem, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let tag = format!(" {} ", item.category.as_str().to_uppercase());
    let meta = format!("  ◉ {}  ◷ {}", item.location, item.year);
    let meta_width = width.saturating_sub(tag.chars().count());
    lines.push(Line::from(vec![
        Span::styled(tag, theme.tag_badge_style()),
        Span::styled(truncate_to_width(&meta, meta_width), theme.muted_style),
    ]));

    for row in wrap_words(&item.title, width) {
        lines.push(Line::from(Span::styled(row, theme.heading_style)));
    }
    for row in wrap_words(&format!("\"{}\"", item.summary), width) {
        lines.push(Line::from(Span::styled(row, theme.text_style)));
    }
    for source in &item.sources {
        let reference = format!("Ref: {}", source.publisher);
        lines.push(Line::from(Span::styled(
            truncate_to_width(&reference, width),
            theme.accent_style.patch(theme.muted_style),
        )));
    }
    lines
}

fn skeleton_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let bar = |fraction: f32| {
        let len = ((width as f32) * fraction).round() as usize;
        Line::from(Span::styled("░".repeat(len.max(1)), theme.future_year_style))
    };
    vec![bar(0.2), bar(0.75), bar(1.0), bar(0.66), Line::default()]
}

fn centered(text: String, style: Style, width: usize) -> Vec<Line<'static>> {
    wrap_words(&text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)).alignment(Alignment::Center))
        .collect()
}

pub fn build_news_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.ui.theme;
    match NewsView::classify(&app.explorer, app.current_year()) {
        NewsView::AwaitingCoordinates => {
            let mut lines = vec![Line::default()];
            lines.extend(centered(AWAITING_TEXT.to_string(), theme.muted_style, width));
            lines
        }
        NewsView::Uncharted { year } => {
            let mut lines = vec![Line::default(), Line::from("✧").alignment(Alignment::Center)];
            lines.extend(centered(
                format!("\"{}\"", uncharted_text(year)),
                theme.muted_style,
                width,
            ));
            lines
        }
        NewsView::Loading => {
            let frame = SPINNER[app.ui.spinner_frame % SPINNER.len()];
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{frame} "), theme.accent_style),
                Span::styled(LOADING_TEXT, theme.muted_style),
            ])
            .alignment(Alignment::Center)];
            lines.push(Line::default());
            for _ in 0..SKELETON_CARDS {
                lines.extend(skeleton_lines(theme, width));
            }
            lines
        }
        NewsView::Error(message) => {
            let mut lines = vec![Line::default()];
            lines.extend(centered(message.to_string(), theme.error_style, width));
            lines
        }
        NewsView::Dispatches(items) => {
            let mut lines = Vec::new();
            for item in items {
                lines.extend(build_card_lines(item, theme, width));
                lines.push(Line::default());
            }
            lines.push(
                Line::from(Span::styled(FOOTER_TEXT.to_uppercase(), theme.future_year_style))
                    .alignment(Alignment::Center),
            );
            lines
        }
        NewsView::Empty => {
            let mut lines = vec![Line::default()];
            lines.extend(centered(format!("\"{EMPTY_TEXT}\""), theme.muted_style, width));
            lines
        }
    }
}

pub fn render_news(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style)
        .title(Span::styled(" Dispatches ", theme.accent_style));
    let body = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    f.render_widget(block, area);

    let lines = build_news_lines(app, body.width as usize);
    let max_scroll = (lines.len() as u16).saturating_sub(body.height);
    let paragraph = Paragraph::new(lines).scroll((app.ui.news_scroll.min(max_scroll), 0));
    f.render_widget(paragraph, body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::news::{Category, LocationState, Source};
    use crate::utils::test_utils::{create_test_app, create_test_item, TEST_YEAR};
    use ratatui::{backend::TestBackend, Terminal};

    fn explorer_with_location() -> ExplorerState {
        let mut explorer = ExplorerState::new(TEST_YEAR);
        explorer.selected_location = Some(LocationState::new(25.2, 55.3, "Dubai, UAE"));
        explorer
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| render_news(f, f.area(), app))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn missing_location_wins_over_every_flag() {
        let mut explorer = ExplorerState::new(TEST_YEAR);
        explorer.selected_year = TEST_YEAR + 4;
        explorer.is_loading = true;
        explorer.error_message = Some("boom".into());
        assert_eq!(
            NewsView::classify(&explorer, TEST_YEAR),
            NewsView::AwaitingCoordinates
        );
    }

    #[test]
    fn future_year_wins_over_loading_and_error() {
        let mut explorer = explorer_with_location();
        explorer.selected_year = TEST_YEAR + 1;
        explorer.is_loading = true;
        explorer.error_message = Some("boom".into());
        assert_eq!(
            NewsView::classify(&explorer, TEST_YEAR),
            NewsView::Uncharted {
                year: TEST_YEAR + 1
            }
        );
    }

    #[test]
    fn loading_then_error_then_results_then_empty() {
        let mut explorer = explorer_with_location();
        explorer.is_loading = true;
        explorer.error_message = Some("boom".into());
        assert_eq!(NewsView::classify(&explorer, TEST_YEAR), NewsView::Loading);

        explorer.is_loading = false;
        assert_eq!(
            NewsView::classify(&explorer, TEST_YEAR),
            NewsView::Error("boom")
        );

        explorer.error_message = None;
        assert_eq!(NewsView::classify(&explorer, TEST_YEAR), NewsView::Empty);

        explorer.news = vec![create_test_item("Dubai, UAE", TEST_YEAR, 0)];
        assert!(matches!(
            NewsView::classify(&explorer, TEST_YEAR),
            NewsView::Dispatches(items) if items.len() == 1
        ));
    }

    #[test]
    fn card_lists_tag_title_summary_and_refs() {
        let item = NewsItem {
            id: "Dubai, UAE-2021-0".into(),
            title: "Metro line opens".into(),
            summary: "Commuters ride free.".into(),
            category: Category::Technology,
            location: "Dubai, UAE".into(),
            year: 2021,
            sources: vec![
                Source {
                    publisher: "Gulf News".into(),
                    url: "https://gulfnews.com".into(),
                },
                Source {
                    publisher: "The National".into(),
                    url: "https://thenationalnews.com".into(),
                },
            ],
        };
        let lines = build_card_lines(&item, &Theme::gilded(), 60);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text[0], " TECHNOLOGY   ◉ Dubai, UAE  ◷ 2021");
        assert_eq!(text[1], "Metro line opens");
        assert_eq!(text[2], "\"Commuters ride free.\"");
        assert_eq!(text[3], "Ref: Gulf News");
        assert_eq!(text[4], "Ref: The National");
    }

    #[test]
    fn awaiting_state_renders_without_location() {
        let app = create_test_app();
        let screen = render_to_string(&app, 40, 8);
        assert!(screen.contains("Awaiting coordinates."));
    }

    #[test]
    fn uncharted_year_renders_placeholder() {
        let mut app = create_test_app();
        app.explorer.selected_location = Some(LocationState::new(48.85, 2.35, "Paris, France"));
        app.explorer.selected_year = 2030;
        let screen = render_to_string(&app, 80, 8);
        assert!(screen.contains("The year 2030 remains uncharted in our neural archives."));
    }

    #[test]
    fn loading_state_shows_indicator_and_two_skeletons() {
        let mut app = create_test_app();
        app.explorer.selected_location = Some(LocationState::new(48.85, 2.35, "Paris, France"));
        app.explorer.is_loading = true;
        let lines = build_news_lines(&app, 40);
        assert!(line_text(&lines[0]).contains(LOADING_TEXT));
        let skeleton_rows = lines
            .iter()
            .filter(|line| line_text(line).starts_with('░'))
            .count();
        assert_eq!(skeleton_rows, 8);
    }

    #[test]
    fn one_card_per_item() {
        let mut app = create_test_app();
        app.explorer.selected_location = Some(LocationState::new(48.85, 2.35, "Paris, France"));
        app.explorer.news = (0..3)
            .map(|i| create_test_item("Paris, France", 2001, i))
            .collect();
        let lines = build_news_lines(&app, 50);
        let tags = lines
            .iter()
            .filter(|line| line_text(line).starts_with(" COMMUNITY "))
            .count();
        assert_eq!(tags, 3);
        assert!(line_text(lines.last().expect("footer")).contains("NEURAL SYNTHESIS ENGINE"));
    }

    #[test]
    fn empty_results_render_quote() {
        let mut app = create_test_app();
        app.explorer.selected_location = Some(LocationState::new(48.85, 2.35, "Paris, France"));
        let screen = render_to_string(&app, 60, 6);
        assert!(screen.contains("No positive dispatches found for this era."));
    }
}
