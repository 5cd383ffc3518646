use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::ui::theme::Theme;
use crate::utils::input::sanitize_search_input;

pub const SEARCH_PLACEHOLDER: &str = "Search city, country, landmark...";

/// Which exploring-mode widget receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Years,
    Map,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Years,
            Focus::Years => Focus::Map,
            Focus::Map => Focus::Search,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Map,
            Focus::Years => Focus::Search,
            Focus::Map => Focus::Years,
        }
    }
}

pub struct UiState {
    pub theme: Theme,
    pub focus: Focus,
    pub quick_picks: Vec<String>,
    /// Free map reticle as `(lat, lng)`; present only while the map has focus.
    pub reticle: Option<(f64, f64)>,
    pub spinner_frame: usize,
    /// Rows scrolled in the news panel; clamped when drawn.
    pub news_scroll: u16,
    search: TextArea<'static>,
}

impl UiState {
    pub fn new(theme: Theme, quick_picks: Vec<String>) -> Self {
        let mut ui = Self {
            theme,
            focus: Focus::Search,
            quick_picks,
            reticle: None,
            spinner_frame: 0,
            news_scroll: 0,
            search: TextArea::default(),
        };
        ui.configure_search_input();
        ui
    }

    pub(crate) fn configure_search_input(&mut self) {
        let text_style = self
            .theme
            .input_text_style
            .patch(Style::default().bg(self.theme.background_color));
        self.search.set_style(text_style);
        self.search.set_cursor_style(self.theme.input_cursor_style);
        self.search.set_cursor_line_style(Style::default());
        self.search.set_placeholder_text(SEARCH_PLACEHOLDER);
        self.search.set_placeholder_style(self.theme.muted_style);
    }

    pub fn search_input(&self) -> &TextArea<'static> {
        &self.search
    }

    pub fn search_text(&self) -> String {
        self.search.lines().join(" ")
    }

    /// Replace the query text, leaving the cursor at the end.
    pub fn set_search_text(&mut self, text: &str) {
        self.search = TextArea::from([sanitize_search_input(text)]);
        self.search.move_cursor(CursorMove::End);
        self.configure_search_input();
    }

    pub fn apply_search_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.search);
    }

    pub fn scroll_news(&mut self, rows: i32) {
        let next = i32::from(self.news_scroll).saturating_add(rows);
        self.news_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
