//! Forecast client configuration

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Base URL used in direct mode, with the API key appended
const DIRECT_BASE_URL: &str = "https://api.forecast.io/forecast";

/// Configuration for the forecast.io client
///
/// Exactly one of `api_key` and `proxy_url` must be set. In direct mode the
/// API key is embedded in every request URL, which exposes it to anything
/// that can observe the URL; route requests through `proxy_url` when the key
/// must stay server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// API key for direct requests against the forecast.io API
    #[serde(default)]
    pub api_key: Option<String>,

    /// Caller-supplied proxy base URL, used instead of the keyed endpoint
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Reproduce the legacy `?url=<lat>,<lon>?units=auto` wire format
    /// (two `?` separators) for compatibility with existing proxy scripts.
    /// Off by default; the corrected format puts the coordinates in the
    /// URL path with a single query string.
    #[serde(default)]
    pub legacy_query: bool,
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            proxy_url: None,
            timeout_secs: default_timeout(),
            legacy_query: false,
        }
    }
}

impl ForecastConfig {
    /// Configuration for direct mode with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Configuration for proxy mode with the given base URL
    #[must_use]
    pub fn with_proxy_url(proxy_url: impl Into<String>) -> Self {
        Self {
            proxy_url: Some(proxy_url.into()),
            ..Self::default()
        }
    }

    /// Resolve the endpoint base URL from the credentials.
    ///
    /// The result always ends with `/` so coordinates can be appended
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Configuration`] when neither or both of
    /// `api_key` and `proxy_url` are set.
    pub fn endpoint(&self) -> Result<String, ForecastError> {
        match (self.api_key.as_deref(), self.proxy_url.as_deref()) {
            (Some(key), None) => Ok(format!("{DIRECT_BASE_URL}/{key}/")),
            (None, Some(proxy)) => {
                if proxy.ends_with('/') {
                    Ok(proxy.to_string())
                } else {
                    Ok(format!("{proxy}/"))
                }
            }
            (None, None) => Err(ForecastError::Configuration(
                "either api_key or proxy_url must be set".to_string(),
            )),
            (Some(_), Some(_)) => Err(ForecastError::Configuration(
                "api_key and proxy_url are mutually exclusive".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ForecastConfig::default();
        assert!(config.api_key.is_none());
        assert!(config.proxy_url.is_none());
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.legacy_query);
    }

    #[test]
    fn test_endpoint_from_api_key() {
        let config = ForecastConfig::with_api_key("abc123");
        assert_eq!(
            config.endpoint().unwrap(),
            "https://api.forecast.io/forecast/abc123/"
        );
    }

    #[test]
    fn test_endpoint_from_proxy_url() {
        let config = ForecastConfig::with_proxy_url("https://example.com/proxy");
        assert_eq!(config.endpoint().unwrap(), "https://example.com/proxy/");

        let config = ForecastConfig::with_proxy_url("https://example.com/proxy/");
        assert_eq!(config.endpoint().unwrap(), "https://example.com/proxy/");
    }

    #[test]
    fn test_endpoint_requires_a_credential() {
        let config = ForecastConfig::default();
        let err = config.endpoint().unwrap_err();
        assert!(matches!(err, ForecastError::Configuration(_)));
    }

    #[test]
    fn test_endpoint_rejects_both_credentials() {
        let config = ForecastConfig {
            api_key: Some("abc123".to_string()),
            proxy_url: Some("https://example.com/proxy".to_string()),
            ..ForecastConfig::default()
        };
        let err = config.endpoint().unwrap_err();
        assert!(matches!(err, ForecastError::Configuration(_)));
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_config_deserialization_applies_defaults() {
        let config: ForecastConfig =
            serde_json::from_str(r#"{"api_key": "abc123"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.legacy_query);
    }
}
