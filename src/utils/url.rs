//! URL helpers for the model endpoint.

/// Strip trailing slashes so endpoint paths can be appended safely.
///
/// ```
/// use beacon::utils::url::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("https://generativelanguage.googleapis.com/v1beta/"),
///     "https://generativelanguage.googleapis.com/v1beta"
/// );
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path without doubling slashes.
///
/// ```
/// use beacon::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://example.com/v1beta/", "/models/m:generateContent"),
///     "https://example.com/v1beta/models/m:generateContent"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}

/// Accept only absolute http(s) URLs with a host part.
pub fn validate_base_url(base_url: &str) -> Result<String, String> {
    let normalized = normalize_base_url(base_url);
    let rest = normalized
        .strip_prefix("https://")
        .or_else(|| normalized.strip_prefix("http://"))
        .ok_or_else(|| format!("Base URL must start with http:// or https:// (got '{base_url}')"))?;

    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(format!("Base URL has no host: '{base_url}'"));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_any_number_of_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://api.example.com/v1beta"),
            "https://api.example.com/v1beta"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com/v1beta///"),
            "https://api.example.com/v1beta"
        );
        assert_eq!(normalize_base_url(" https://api.example.com/ "), "https://api.example.com");
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn construct_joins_model_paths() {
        assert_eq!(
            construct_api_url(
                "https://generativelanguage.googleapis.com/v1beta",
                "models/gemini-3-flash-preview:generateContent"
            ),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert_eq!(
            construct_api_url("http://localhost:8080/", "///models/x:generateContent"),
            "http://localhost:8080/models/x:generateContent"
        );
    }

    #[test]
    fn validate_requires_scheme_and_host() {
        assert_eq!(
            validate_base_url("https://proxy.internal/v1beta/").as_deref(),
            Ok("https://proxy.internal/v1beta")
        );
        assert!(validate_base_url("generativelanguage.googleapis.com").is_err());
        assert!(validate_base_url("https:///v1beta").is_err());
        assert!(validate_base_url("ftp://example.com").is_err());
    }
}
