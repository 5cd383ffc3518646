use tracing::debug;

use super::{AppAction, AppCommand};
use crate::core::app::{clamp_year, App};
use crate::core::gateway::RequestKind;

pub(super) fn handle_news_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SelectYear { year } => select_year(app, year),
        AppAction::StepYear { delta } => {
            let year = app.explorer.selected_year.saturating_add(delta);
            select_year(app, year)
        }
        AppAction::NewsLoaded { items, token } => {
            if !app.requests.settle(RequestKind::News, token) {
                debug!(token, "dropping stale dispatches");
                return None;
            }
            app.explorer.news = items;
            app.explorer.is_loading = false;
            None
        }
        AppAction::NewsFailed { message, token } => {
            if !app.requests.settle(RequestKind::News, token) {
                debug!(token, "dropping stale news failure");
                return None;
            }
            app.explorer.error_message = Some(message);
            app.explorer.is_loading = false;
            None
        }
        _ => unreachable!("non-news action routed to news handler"),
    }
}

fn select_year(app: &mut App, year: i32) -> Option<AppCommand> {
    let year = clamp_year(year);
    if year == app.explorer.selected_year {
        return None;
    }
    app.explorer.selected_year = year;
    app.run_news_query()
}
