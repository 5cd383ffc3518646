use tracing::debug;

use super::{AppAction, AppCommand};
use crate::core::app::{App, Focus};
use crate::core::gateway::RequestKind;
use crate::core::news::{AppMode, LocationState};

pub(super) fn handle_navigation_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::EnterExploring => {
            app.explorer.mode = AppMode::Exploring;
            set_focus(app, Focus::Search);
            app.run_news_query()
        }
        AppAction::ExitToLanding => {
            app.explorer.mode = AppMode::Landing;
            set_focus(app, Focus::Search);
            None
        }
        AppAction::CycleFocus { reverse } => {
            let focus = if reverse {
                app.ui.focus.previous()
            } else {
                app.ui.focus.next()
            };
            set_focus(app, focus);
            None
        }
        AppAction::MoveReticle { d_lat, d_lng } => {
            if let Some((lat, lng)) = app.ui.reticle {
                app.ui.reticle = Some((clamp_lat(lat + d_lat), wrap_lng(lng + d_lng)));
            }
            None
        }
        AppAction::PinMapPoint { lat, lng } => {
            app.requests.invalidate(RequestKind::Resolve);
            app.explorer.is_resolving_location = false;
            let ticket = app.requests.issue(RequestKind::Geocode);
            Some(AppCommand::ReverseGeocode {
                lat: clamp_lat(lat),
                lng: wrap_lng(lng),
                ticket,
            })
        }
        AppAction::PointNamed {
            lat,
            lng,
            name,
            token,
        } => {
            if !app.requests.settle(RequestKind::Geocode, token) {
                debug!(token, "dropping stale geocode result");
                return None;
            }
            app.explorer.selected_location = Some(LocationState::new(lat, lng, name));
            app.run_news_query()
        }
        _ => unreachable!("non-navigation action routed to navigation handler"),
    }
}

/// Entering the map seeds the reticle from the current location.
fn set_focus(app: &mut App, focus: Focus) {
    app.ui.reticle = match focus {
        Focus::Map => app.ui.reticle.or_else(|| {
            Some(
                app.explorer
                    .selected_location
                    .as_ref()
                    .map_or((0.0, 0.0), |loc| (loc.lat, loc.lng)),
            )
        }),
        Focus::Search | Focus::Years => None,
    };
    app.ui.focus = focus;
}

pub(crate) fn clamp_lat(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}

/// Wrap into `[-180, 180)`.
pub(crate) fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}
