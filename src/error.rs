//! Forecast client error types

use thiserror::Error;

/// Errors that can occur when talking to the forecast service
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Latitude or longitude is not a finite number
    #[error("Invalid coordinates: latitude and longitude must be finite numbers")]
    InvalidCoordinates,

    /// Connection to the forecast service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the forecast service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl ForecastError {
    /// Returns true if this error originated in the HTTP transport,
    /// as opposed to configuration or response parsing.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_) | Self::RequestFailed(_) | Self::ServiceUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors() {
        assert!(ForecastError::ConnectionFailed("test".to_string()).is_transport());
        assert!(ForecastError::RequestFailed("test".to_string()).is_transport());
        assert!(ForecastError::ServiceUnavailable("test".to_string()).is_transport());
    }

    #[test]
    fn test_non_transport_errors() {
        assert!(!ForecastError::Configuration("test".to_string()).is_transport());
        assert!(!ForecastError::InvalidCoordinates.is_transport());
        assert!(!ForecastError::ParseError("test".to_string()).is_transport());
    }

    #[test]
    fn test_error_display() {
        let err = ForecastError::Configuration("neither api_key nor proxy_url set".to_string());
        assert!(err.to_string().contains("api_key"));

        let err = ForecastError::InvalidCoordinates;
        assert!(err.to_string().contains("finite"));

        let err = ForecastError::ServiceUnavailable("HTTP 503".to_string());
        assert!(err.to_string().contains("503"));
    }
}
