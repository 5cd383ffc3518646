//! Config keys exposed through `beacon set` / `beacon unset`.

use std::fmt;
use std::str::FromStr;

use crate::core::config::data::Config;
use crate::core::config::defaults::MAX_QUICK_PICKS;
use crate::ui::builtin_themes::{builtin_theme_ids, find_builtin_theme};
use crate::utils::url::validate_base_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Model,
    BaseUrl,
    Timeout,
    WebSearch,
    Theme,
    QuickPicks,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::Model,
        ConfigKey::BaseUrl,
        ConfigKey::Timeout,
        ConfigKey::WebSearch,
        ConfigKey::Theme,
        ConfigKey::QuickPicks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::Model => "model",
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Timeout => "timeout",
            ConfigKey::WebSearch => "web-search",
            ConfigKey::Theme => "theme",
            ConfigKey::QuickPicks => "quick-picks",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigKeyError {
    UnknownKey(String),
    InvalidValue { key: &'static str, message: String },
}

impl fmt::Display for ConfigKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKeyError::UnknownKey(key) => {
                let known: Vec<&str> = ConfigKey::ALL.iter().map(ConfigKey::name).collect();
                write!(f, "Unknown config key: {key} (known: {})", known.join(", "))
            }
            ConfigKeyError::InvalidValue { key, message } => {
                write!(f, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigKeyError {}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Apply `value` to `key`, returning a confirmation line.
    pub fn set_key(&mut self, key: ConfigKey, value: &str) -> Result<String, ConfigKeyError> {
        let invalid = |message: String| ConfigKeyError::InvalidValue {
            key: key.name(),
            message,
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(invalid("value must not be empty".to_string()));
        }

        match key {
            ConfigKey::Model => {
                self.model = Some(value.to_string());
            }
            ConfigKey::BaseUrl => {
                self.base_url = Some(validate_base_url(value).map_err(invalid)?);
            }
            ConfigKey::Timeout => {
                let secs = value
                    .trim_end_matches('s')
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| invalid(format!("expected a positive number of seconds, got '{value}'")))?;
                self.request_timeout_secs = Some(secs);
            }
            ConfigKey::WebSearch => {
                let enabled = parse_bool(value)
                    .ok_or_else(|| invalid(format!("expected on/off, got '{value}'")))?;
                self.web_search = Some(enabled);
            }
            ConfigKey::Theme => {
                let spec = find_builtin_theme(value).ok_or_else(|| {
                    invalid(format!(
                        "unknown theme '{value}' (available: {})",
                        builtin_theme_ids().join(", ")
                    ))
                })?;
                self.theme = Some(spec.id);
            }
            ConfigKey::QuickPicks => {
                let picks: Vec<String> = value
                    .split(';')
                    .map(str::trim)
                    .filter(|pick| !pick.is_empty())
                    .map(str::to_string)
                    .collect();
                if picks.is_empty() || picks.len() > MAX_QUICK_PICKS {
                    return Err(invalid(format!(
                        "expected 1-{MAX_QUICK_PICKS} places separated by ';'"
                    )));
                }
                self.quick_picks = picks;
            }
        }

        Ok(format!("Set {} to: {value}", key.name()))
    }

    pub fn unset_key(&mut self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Model => self.model = None,
            ConfigKey::BaseUrl => self.base_url = None,
            ConfigKey::Timeout => self.request_timeout_secs = None,
            ConfigKey::WebSearch => self.web_search = None,
            ConfigKey::Theme => self.theme = None,
            ConfigKey::QuickPicks => self.quick_picks.clear(),
        }
        format!("Unset {}", key.name())
    }
}
