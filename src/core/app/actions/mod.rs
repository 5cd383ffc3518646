mod navigation;
mod news;
mod search;

use tokio::sync::mpsc;

use super::{local_current_year, App, RequestTicket};
use crate::core::news::{LocationState, NewsItem};

pub enum AppAction {
    SubmitSearch {
        query: String,
    },
    SubmitSearchInput,
    QuickPick {
        index: usize,
    },
    LocationResolved {
        location: LocationState,
        token: u64,
    },
    LocationFailed {
        message: String,
        token: u64,
    },
    SelectYear {
        year: i32,
    },
    StepYear {
        delta: i32,
    },
    NewsLoaded {
        items: Vec<NewsItem>,
        token: u64,
    },
    NewsFailed {
        message: String,
        token: u64,
    },
    EnterExploring,
    ExitToLanding,
    CycleFocus {
        reverse: bool,
    },
    MoveReticle {
        d_lat: f64,
        d_lng: f64,
    },
    PinMapPoint {
        lat: f64,
        lng: f64,
    },
    PointNamed {
        lat: f64,
        lng: f64,
        name: String,
        token: u64,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct AppActionContext {
    /// Calendar year on the local clock when the action was produced.
    pub current_year: i32,
}

impl AppActionContext {
    pub fn now() -> Self {
        Self {
            current_year: local_current_year(),
        }
    }
}

pub struct AppActionEnvelope {
    pub action: AppAction,
    pub context: AppActionContext,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppActionEnvelope>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppActionEnvelope>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction, ctx: AppActionContext) {
        self.dispatch_many([action], ctx);
    }

    pub fn dispatch_many<I>(&self, actions: I, ctx: AppActionContext)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(AppActionEnvelope {
                action,
                context: ctx,
            });
        }
    }
}

/// Gateway work requested by the reducer.
#[derive(Debug)]
pub enum AppCommand {
    ResolveLocation {
        query: String,
        ticket: RequestTicket,
    },
    FetchNews {
        location: String,
        year: i32,
        ticket: RequestTicket,
    },
    ReverseGeocode {
        lat: f64,
        lng: f64,
        ticket: RequestTicket,
    },
}

pub fn apply_actions(
    app: &mut App,
    envelopes: impl IntoIterator<Item = AppActionEnvelope>,
) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for envelope in envelopes {
        if let Some(cmd) = apply_action(app, envelope.action, envelope.context) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction, ctx: AppActionContext) -> Option<AppCommand> {
    app.observe_clock(ctx.current_year);

    match action {
        AppAction::SubmitSearch { .. }
        | AppAction::SubmitSearchInput
        | AppAction::QuickPick { .. }
        | AppAction::LocationResolved { .. }
        | AppAction::LocationFailed { .. } => search::handle_search_action(app, action),

        AppAction::SelectYear { .. }
        | AppAction::StepYear { .. }
        | AppAction::NewsLoaded { .. }
        | AppAction::NewsFailed { .. } => news::handle_news_action(app, action),

        AppAction::EnterExploring
        | AppAction::ExitToLanding
        | AppAction::CycleFocus { .. }
        | AppAction::MoveReticle { .. }
        | AppAction::PinMapPoint { .. }
        | AppAction::PointNamed { .. } => navigation::handle_navigation_action(app, action),
    }
}
