//! Key routing for the explorer.
//!
//! Routing is a pure function of the current state and the key, so the loop
//! only has to carry out the returned [`KeyRoute`].

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::app::{App, AppAction, Focus, FIRST_YEAR, LAST_YEAR};
use crate::core::news::AppMode;

/// Degrees the map reticle moves per arrow press.
pub const RETICLE_STEP: f64 = 1.0;
/// Degrees per arrow press while Shift is held.
pub const RETICLE_FAST_STEP: f64 = 10.0;
/// Rows scrolled per PageUp/PageDown.
pub const NEWS_PAGE_ROWS: i32 = 8;

pub enum KeyRoute {
    Exit,
    Actions(Vec<AppAction>),
    /// Forward the key to the search textarea.
    EditSearch,
    ScrollNews(i32),
    Ignored,
}

impl KeyRoute {
    fn action(action: AppAction) -> Self {
        KeyRoute::Actions(vec![action])
    }
}

pub fn route_key(app: &App, key: KeyEvent) -> KeyRoute {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        return KeyRoute::Exit;
    }

    match app.explorer.mode {
        AppMode::Landing => route_landing_key(key),
        AppMode::Exploring => route_exploring_key(app, key),
    }
}

fn route_landing_key(key: KeyEvent) -> KeyRoute {
    match key.code {
        KeyCode::Enter => KeyRoute::action(AppAction::EnterExploring),
        KeyCode::Char('q') | KeyCode::Esc => KeyRoute::Exit,
        _ => KeyRoute::Ignored,
    }
}

fn route_exploring_key(app: &App, key: KeyEvent) -> KeyRoute {
    match key.code {
        KeyCode::Esc => return KeyRoute::action(AppAction::ExitToLanding),
        KeyCode::Tab => return KeyRoute::action(AppAction::CycleFocus { reverse: false }),
        KeyCode::BackTab => return KeyRoute::action(AppAction::CycleFocus { reverse: true }),
        KeyCode::PageUp => return KeyRoute::ScrollNews(-NEWS_PAGE_ROWS),
        KeyCode::PageDown => return KeyRoute::ScrollNews(NEWS_PAGE_ROWS),
        _ => {}
    }

    match app.ui.focus {
        Focus::Search => route_search_key(app, key),
        Focus::Years => route_years_key(app, key),
        Focus::Map => route_map_key(app, key),
    }
}

/// Digits pick a preset unless the user is typing a query.
fn quick_pick_index(app: &App, key: &KeyEvent) -> Option<usize> {
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let digit = c.to_digit(10).filter(|d| *d >= 1)? as usize;
    if app.ui.focus == Focus::Search && !app.ui.search_text().trim().is_empty() {
        return None;
    }
    (digit <= app.ui.quick_picks.len()).then(|| digit - 1)
}

fn route_search_key(app: &App, key: KeyEvent) -> KeyRoute {
    if let Some(index) = quick_pick_index(app, &key) {
        return KeyRoute::action(AppAction::QuickPick { index });
    }
    match key.code {
        KeyCode::Enter => KeyRoute::action(AppAction::SubmitSearchInput),
        _ if app.explorer.is_resolving_location => KeyRoute::Ignored,
        _ => KeyRoute::EditSearch,
    }
}

fn route_years_key(app: &App, key: KeyEvent) -> KeyRoute {
    if let Some(index) = quick_pick_index(app, &key) {
        return KeyRoute::action(AppAction::QuickPick { index });
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => KeyRoute::action(AppAction::StepYear { delta: 1 }),
        KeyCode::Right | KeyCode::Char('l') => {
            KeyRoute::action(AppAction::StepYear { delta: -1 })
        }
        KeyCode::Home => KeyRoute::action(AppAction::SelectYear { year: LAST_YEAR }),
        KeyCode::End => KeyRoute::action(AppAction::SelectYear { year: FIRST_YEAR }),
        _ => KeyRoute::Ignored,
    }
}

fn route_map_key(app: &App, key: KeyEvent) -> KeyRoute {
    if let Some(index) = quick_pick_index(app, &key) {
        return KeyRoute::action(AppAction::QuickPick { index });
    }
    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        RETICLE_FAST_STEP
    } else {
        RETICLE_STEP
    };
    let (d_lat, d_lng) = match key.code {
        KeyCode::Up => (step, 0.0),
        KeyCode::Down => (-step, 0.0),
        KeyCode::Left => (0.0, -step),
        KeyCode::Right => (0.0, step),
        KeyCode::Enter => {
            return match app.ui.reticle {
                Some((lat, lng)) => KeyRoute::action(AppAction::PinMapPoint { lat, lng }),
                None => KeyRoute::Ignored,
            };
        }
        _ => return KeyRoute::Ignored,
    };
    KeyRoute::action(AppAction::MoveReticle { d_lat, d_lng })
}
