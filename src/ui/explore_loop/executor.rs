//! Runs reducer commands against the gateway and reports back as actions.

use std::time::Duration;

use tracing::{debug, warn};

use crate::core::app::{AppAction, AppActionContext, AppActionDispatcher, AppCommand};
use crate::core::gateway::{Gateway, GatewayError, RequestKind, SharedGateway, GEOCODE_FALLBACK};

#[derive(Clone)]
pub struct CommandExecutor {
    gateway: SharedGateway,
    dispatcher: AppActionDispatcher,
    timeout: Duration,
}

impl CommandExecutor {
    pub fn new(gateway: SharedGateway, dispatcher: AppActionDispatcher, timeout: Duration) -> Self {
        Self {
            gateway,
            dispatcher,
            timeout,
        }
    }

    pub fn spawn(&self, command: AppCommand) -> tokio::task::JoinHandle<()> {
        let executor = self.clone();
        tokio::spawn(async move {
            if let Some(action) = run_command(executor.gateway.as_ref(), command, executor.timeout).await
            {
                executor.dispatcher.dispatch(action, AppActionContext::now());
            }
        })
    }
}

/// Execute one command. Returns `None` when the request was superseded.
pub async fn run_command(
    gateway: &dyn Gateway,
    command: AppCommand,
    timeout: Duration,
) -> Option<AppAction> {
    match command {
        AppCommand::ResolveLocation { query, ticket } => {
            let token = ticket.token;
            let outcome = tokio::select! {
                _ = ticket.cancel.cancelled() => None,
                result = tokio::time::timeout(timeout, gateway.resolve_location(&query)) => Some(result),
            };
            let Some(result) = outcome else {
                debug!(token, query = %query, "location lookup superseded");
                return None;
            };
            Some(match result {
                Ok(Ok(location)) => AppAction::LocationResolved { location, token },
                Ok(Err(err)) => AppAction::LocationFailed {
                    message: err.user_message(),
                    token,
                },
                Err(_) => {
                    let err = timed_out(RequestKind::Resolve, timeout);
                    warn!(token, query = %query, error = %err, "location lookup timed out");
                    AppAction::LocationFailed {
                        message: err.user_message(),
                        token,
                    }
                }
            })
        }
        AppCommand::FetchNews {
            location,
            year,
            ticket,
        } => {
            let token = ticket.token;
            let outcome = tokio::select! {
                _ = ticket.cancel.cancelled() => None,
                result = tokio::time::timeout(timeout, gateway.fetch_good_news(&location, year)) => Some(result),
            };
            let Some(result) = outcome else {
                debug!(token, location = %location, year, "news fetch superseded");
                return None;
            };
            Some(match result {
                Ok(Ok(items)) => AppAction::NewsLoaded { items, token },
                Ok(Err(err)) => AppAction::NewsFailed {
                    message: err.user_message(),
                    token,
                },
                Err(_) => {
                    let err = timed_out(RequestKind::News, timeout);
                    warn!(token, location = %location, year, error = %err, "news fetch timed out");
                    AppAction::NewsFailed {
                        message: err.user_message(),
                        token,
                    }
                }
            })
        }
        AppCommand::ReverseGeocode { lat, lng, ticket } => {
            let token = ticket.token;
            let outcome = tokio::select! {
                _ = ticket.cancel.cancelled() => None,
                result = tokio::time::timeout(timeout, gateway.reverse_geocode(lat, lng)) => Some(result),
            };
            let Some(result) = outcome else {
                debug!(token, lat, lng, "reverse geocode superseded");
                return None;
            };
            let name = result.unwrap_or_else(|_| {
                warn!(token, lat, lng, "reverse geocode timed out, using fallback label");
                GEOCODE_FALLBACK.to_string()
            });
            Some(AppAction::PointNamed {
                lat,
                lng,
                name,
                token,
            })
        }
    }
}

fn timed_out(kind: RequestKind, after: Duration) -> GatewayError {
    GatewayError::Timeout { kind, after }
}
