use std::time::Duration;

use crate::core::config::data::Config;
use crate::core::gateway::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

pub const DEFAULT_QUICK_PICKS: [&str; 5] = [
    "Dubai, UAE",
    "Paris, France",
    "Tokyo, Japan",
    "New York",
    "Sydney",
];

/// Quick picks are bound to the digit keys 1-9.
pub const MAX_QUICK_PICKS: usize = 9;

impl Config {
    pub fn effective_model(&self) -> &str {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn web_search_enabled(&self) -> bool {
        self.web_search.unwrap_or(true)
    }

    pub fn effective_quick_picks(&self) -> Vec<String> {
        let configured: Vec<String> = self
            .quick_picks
            .iter()
            .map(|pick| pick.trim().to_string())
            .filter(|pick| !pick.is_empty())
            .take(MAX_QUICK_PICKS)
            .collect();

        if configured.is_empty() {
            DEFAULT_QUICK_PICKS.iter().map(|pick| pick.to_string()).collect()
        } else {
            configured
        }
    }
}
