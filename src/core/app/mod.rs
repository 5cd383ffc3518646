//! Explorer view state and the reducer that drives it.
//!
//! The [`App`] only changes through [`apply_actions`]. Actions that need the
//! network return an [`AppCommand`]; the event loop runs it and reports the
//! outcome back as another action tagged with the request's sequence token.

use chrono::Datelike;

use crate::core::config::Config;
use crate::core::gateway::RequestKind;
use crate::core::news::{AppMode, LocationState, NewsItem};
use crate::ui::theme::Theme;

pub mod actions;
pub mod requests;
pub mod ui_state;

pub use actions::{
    apply_action, apply_actions, AppAction, AppActionContext, AppActionDispatcher,
    AppActionEnvelope, AppCommand,
};
pub use requests::{RequestTicket, RequestTracker};
pub use ui_state::{Focus, UiState};

/// Oldest year on the strip.
pub const FIRST_YEAR: i32 = 1950;
/// Newest year on the strip; years past the clock are shown but never fetched.
pub const LAST_YEAR: i32 = 2031;

pub fn local_current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn clamp_year(year: i32) -> i32 {
    year.clamp(FIRST_YEAR, LAST_YEAR)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    pub mode: AppMode,
    pub selected_location: Option<LocationState>,
    pub selected_year: i32,
    pub news: Vec<NewsItem>,
    pub is_loading: bool,
    pub is_resolving_location: bool,
    pub error_message: Option<String>,
}

impl ExplorerState {
    pub fn new(current_year: i32) -> Self {
        Self {
            mode: AppMode::Landing,
            selected_location: None,
            selected_year: clamp_year(current_year),
            news: Vec::new(),
            is_loading: false,
            is_resolving_location: false,
            error_message: None,
        }
    }
}

pub struct App {
    pub explorer: ExplorerState,
    pub ui: UiState,
    pub requests: RequestTracker,
    current_year: i32,
}

impl App {
    pub fn new(config: &Config, current_year: i32) -> Self {
        let theme = config
            .theme
            .as_deref()
            .map(Theme::from_name)
            .unwrap_or_else(Theme::gilded);
        Self::with_theme(theme, config.effective_quick_picks(), current_year)
    }

    pub fn with_theme(theme: Theme, quick_picks: Vec<String>, current_year: i32) -> Self {
        Self {
            explorer: ExplorerState::new(current_year),
            ui: UiState::new(theme, quick_picks),
            requests: RequestTracker::new(),
            current_year,
        }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub(crate) fn observe_clock(&mut self, current_year: i32) {
        self.current_year = current_year;
    }

    pub fn is_future_year(&self, year: i32) -> bool {
        year > self.current_year
    }

    pub fn is_naming_point(&self) -> bool {
        self.requests.in_flight(RequestKind::Geocode)
    }

    /// Re-run the news query for the current location, year and mode.
    ///
    /// Nothing happens outside Exploring or without a location. A future year
    /// clears the list and drops any fetch still in flight.
    pub(crate) fn run_news_query(&mut self) -> Option<AppCommand> {
        if self.explorer.mode != AppMode::Exploring {
            return None;
        }
        let location = self.explorer.selected_location.as_ref()?.name.clone();
        let year = self.explorer.selected_year;

        if self.is_future_year(year) {
            self.requests.invalidate(RequestKind::News);
            self.explorer.news.clear();
            self.explorer.is_loading = false;
            return None;
        }

        self.explorer.is_loading = true;
        self.explorer.error_message = None;
        self.explorer.news.clear();
        self.ui.news_scroll = 0;
        let ticket = self.requests.issue(RequestKind::News);
        Some(AppCommand::FetchNews {
            location,
            year,
            ticket,
        })
    }
}

#[cfg(test)]
mod tests;
