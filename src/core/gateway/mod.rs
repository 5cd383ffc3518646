//! The AI gateway: three single-round-trip operations against the model.
//!
//! - [`Gateway`] is the seam the controller's executor talks to.
//! - [`GeminiGateway`] implements it on top of any [`ModelTransport`]; the
//!   production transport is [`HttpTransport`].
//!
//! Failure policy differs per operation: resolve and fetch propagate a
//! [`GatewayError`], reverse geocode degrades to [`GEOCODE_FALLBACK`].

use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::news::{LocationState, NewsItem};

mod client;
pub mod parse;
pub mod prompts;
pub mod transport;

pub use client::{
    GatewaySettings, GeminiGateway, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
pub use transport::{HttpTransport, ModelTransport, TransportError};

/// Label used when reverse geocoding fails for any reason.
pub const GEOCODE_FALLBACK: &str = "Selected Point";
/// Label used when reverse geocoding succeeds with an empty reply.
pub const UNKNOWN_PLACE: &str = "Unknown Location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Resolve,
    News,
    Geocode,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestKind::Resolve => "location lookup",
            RequestKind::News => "news retrieval",
            RequestKind::Geocode => "reverse geocode",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The place query could not be turned into coordinates.
    LocationResolution { detail: String },
    /// Dispatches could not be retrieved or parsed.
    NewsFetch { detail: String },
    /// The call did not settle within the configured window.
    Timeout { kind: RequestKind, after: Duration },
}

impl GatewayError {
    pub fn location(detail: impl Into<String>) -> Self {
        GatewayError::LocationResolution {
            detail: detail.into(),
        }
    }

    pub fn news(detail: impl Into<String>) -> Self {
        GatewayError::NewsFetch {
            detail: detail.into(),
        }
    }

    /// Text shown in the UI for this failure.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::LocationResolution { .. } => "Could not find that location.".to_string(),
            GatewayError::NewsFetch { detail } => format!("Archive retrieval failed: {detail}"),
            GatewayError::Timeout {
                kind: RequestKind::Resolve,
                after,
            } => format!(
                "Could not find that location (no answer after {}s).",
                after.as_secs()
            ),
            GatewayError::Timeout { kind, after } => {
                let mut label = kind.to_string();
                if let Some(first) = label.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                format!("{label} timed out after {}s.", after.as_secs())
            }
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::LocationResolution { detail } => {
                write!(f, "location resolution failed: {detail}")
            }
            GatewayError::NewsFetch { detail } => write!(f, "news fetch failed: {detail}"),
            GatewayError::Timeout { kind, after } => {
                write!(f, "{kind} timed out after {}s", after.as_secs())
            }
        }
    }
}

impl Error for GatewayError {}

#[async_trait]
pub trait Gateway: Send + Sync {
    async fn resolve_location(&self, query: &str) -> Result<LocationState, GatewayError>;

    async fn fetch_good_news(
        &self,
        location: &str,
        year: i32,
    ) -> Result<Vec<NewsItem>, GatewayError>;

    /// Never fails; see [`GEOCODE_FALLBACK`].
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> String;
}

pub type SharedGateway = Arc<dyn Gateway>;
