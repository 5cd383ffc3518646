use tracing::debug;

use super::{AppAction, AppCommand};
use crate::core::app::App;
use crate::core::gateway::RequestKind;

pub(super) fn handle_search_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitSearch { query } => submit_search(app, query),
        AppAction::SubmitSearchInput => {
            if app.explorer.is_resolving_location {
                return None;
            }
            let query = app.ui.search_text();
            submit_search(app, query)
        }
        AppAction::QuickPick { index } => {
            if app.explorer.is_resolving_location {
                return None;
            }
            let pick = app.ui.quick_picks.get(index)?.clone();
            app.ui.set_search_text(&pick);
            submit_search(app, pick)
        }
        AppAction::LocationResolved { location, token } => {
            if !app.requests.settle(RequestKind::Resolve, token) {
                debug!(token, "dropping stale location result");
                return None;
            }
            app.explorer.is_resolving_location = false;
            app.explorer.selected_location = Some(location);
            app.run_news_query()
        }
        AppAction::LocationFailed { message, token } => {
            if !app.requests.settle(RequestKind::Resolve, token) {
                debug!(token, "dropping stale location failure");
                return None;
            }
            app.explorer.is_resolving_location = false;
            app.explorer.error_message = Some(message);
            None
        }
        _ => unreachable!("non-search action routed to search handler"),
    }
}

/// Blank queries are ignored; anything else supersedes a lookup or a map pin
/// in flight.
fn submit_search(app: &mut App, query: String) -> Option<AppCommand> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    app.requests.invalidate(RequestKind::Geocode);
    app.explorer.is_resolving_location = true;
    app.explorer.error_message = None;
    let ticket = app.requests.issue(RequestKind::Resolve);
    Some(AppCommand::ResolveLocation {
        query: query.to_string(),
        ticket,
    })
}
