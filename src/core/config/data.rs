use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Model id passed to `generateContent` (e.g., "gemini-3-flash-preview")
    pub model: Option<String>,
    /// API root, without the `models/...` suffix
    pub base_url: Option<String>,
    /// Seconds before an outstanding request is abandoned
    pub request_timeout_secs: Option<u64>,
    /// Let the model ground news answers with web search
    pub web_search: Option<bool>,
    /// UI theme name ("gilded" or "mono")
    pub theme: Option<String>,
    /// Places offered as one-key shortcuts under the search box
    #[serde(default)]
    pub quick_picks: Vec<String>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
