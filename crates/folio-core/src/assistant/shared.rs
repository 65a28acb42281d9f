//! Types and helpers shared by the HTTP clients (Gemini, EmailJS).

use std::fmt;

use anyhow::{Context, Result};
use serde_json::Value;

/// Standard User-Agent header for folio API requests.
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Config resolution helpers
// ============================================================================

/// Resolves an API key with precedence: config > env.
///
/// # Errors
/// Returns an error if neither source provides a key.
pub fn resolve_api_key(
    config_api_key: Option<&str>,
    env_var: &str,
    config_section: &str,
) -> Result<String> {
    if let Some(key) = config_api_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    let from_env = std::env::var(env_var).ok();
    from_env
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .with_context(|| {
            format!("No API key available. Set {env_var} or api_key in [{config_section}].")
        })
}

/// Resolves a base URL with precedence: env > config > default.
///
/// # Errors
/// Returns an error if the chosen URL does not parse.
pub fn resolve_base_url(
    config_base_url: Option<&str>,
    env_var: &str,
    default_url: &str,
    service_name: &str,
) -> Result<String> {
    if let Ok(env_url) = std::env::var(env_var) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, service_name)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    if let Some(config_url) = config_base_url {
        let trimmed = config_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, service_name)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    Ok(default_url.to_string())
}

fn validate_url(url: &str, service_name: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid {service_name} base URL: {url}"))?;
    Ok(())
}

// ============================================================================
// Errors
// ============================================================================

/// Error categories for remote calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Connection timeout or request timeout
    Timeout,
    /// Failed to parse response
    Parse,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderErrorKind::HttpStatus => write!(f, "http_status"),
            ProviderErrorKind::Timeout => write!(f, "timeout"),
            ProviderErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from a remote service with kind and details.
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// Error category
    pub kind: ProviderErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, preferring `error.message` from a JSON body.
    pub fn http_status(status: u16, body: &str) -> Self {
        let message = format!("HTTP {status}");
        if body.is_empty() {
            return Self::new(ProviderErrorKind::HttpStatus, message);
        }

        if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(msg) = json
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
        {
            return Self {
                kind: ProviderErrorKind::HttpStatus,
                message: format!("HTTP {status}: {msg}"),
                details: Some(body.to_string()),
            };
        }

        Self {
            kind: ProviderErrorKind::HttpStatus,
            message,
            details: Some(body.to_string()),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Parse, message)
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ProviderError {}

/// Maps a transport error to a `ProviderError`.
pub fn classify_reqwest_error(e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::timeout(format!("Request timed out: {e}"))
    } else if e.is_connect() {
        ProviderError::timeout(format!("Connection failed: {e}"))
    } else if e.is_request() {
        ProviderError::new(ProviderErrorKind::HttpStatus, format!("Request error: {e}"))
    } else {
        ProviderError::new(ProviderErrorKind::HttpStatus, format!("Network error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_extracts_json_message() {
        let err = ProviderError::http_status(
            400,
            r#"{"error":{"code":400,"message":"API key not valid"}}"#,
        );
        assert_eq!(err.kind, ProviderErrorKind::HttpStatus);
        assert_eq!(err.to_string(), "HTTP 400: API key not valid");
        assert!(err.details.is_some());
    }

    #[test]
    fn test_http_status_keeps_plain_body_as_details() {
        let err = ProviderError::http_status(503, "upstream unavailable");
        assert_eq!(err.to_string(), "HTTP 503");
        assert_eq!(err.details.as_deref(), Some("upstream unavailable"));
    }

    #[test]
    fn test_config_key_wins_over_env() {
        let key = resolve_api_key(Some("  from-config "), "FOLIO_TEST_NEVER_SET_KEY", "x")
            .unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn test_missing_key_names_env_and_section() {
        let err = resolve_api_key(None, "FOLIO_TEST_NEVER_SET_KEY", "providers.gemini")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "No API key available. Set FOLIO_TEST_NEVER_SET_KEY or api_key in [providers.gemini]."
        );
    }

    #[test]
    fn test_base_url_falls_back_to_config_then_default() {
        let url = resolve_base_url(
            Some("http://127.0.0.1:9/"),
            "FOLIO_TEST_NEVER_SET_URL",
            "https://default.example.com",
            "Test",
        )
        .unwrap();
        assert_eq!(url, "http://127.0.0.1:9");

        let url = resolve_base_url(
            None,
            "FOLIO_TEST_NEVER_SET_URL",
            "https://default.example.com",
            "Test",
        )
        .unwrap();
        assert_eq!(url, "https://default.example.com");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = resolve_base_url(
            Some("not a url"),
            "FOLIO_TEST_NEVER_SET_URL",
            "https://default.example.com",
            "Gemini",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid Gemini base URL"));
    }
}
