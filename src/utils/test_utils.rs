use crate::core::app::{apply_action, App, AppAction, AppActionContext, AppCommand};
use crate::core::config::defaults::DEFAULT_QUICK_PICKS;
use crate::core::news::{Category, NewsItem, Source};
use crate::ui::theme::Theme;

/// Frozen clock used by controller and widget tests.
pub const TEST_YEAR: i32 = 2025;

pub fn test_ctx() -> AppActionContext {
    AppActionContext {
        current_year: TEST_YEAR,
    }
}

pub fn create_test_app() -> App {
    let quick_picks = DEFAULT_QUICK_PICKS.iter().map(|s| s.to_string()).collect();
    App::with_theme(Theme::gilded(), quick_picks, TEST_YEAR)
}

pub fn dispatch(app: &mut App, action: AppAction) -> Option<AppCommand> {
    apply_action(app, action, test_ctx())
}

pub fn create_test_item(location: &str, year: i32, index: usize) -> NewsItem {
    NewsItem {
        id: NewsItem::make_id(location, year, index),
        title: format!("Dispatch {index}"),
        summary: "Volunteers restored the old harbour promenade.".to_string(),
        category: Category::Community,
        location: location.to_string(),
        year,
        sources: vec![Source {
            publisher: "Harbour Herald".to_string(),
            url: "https://example.com/harbour".to_string(),
        }],
    }
}
