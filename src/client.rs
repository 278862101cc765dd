//! Forecast.io HTTP client
//!
//! One GET per query; the response document is parsed and the relevant
//! records wrapped in [`Conditions`] views. Dropping a returned future
//! before completion abandons the in-flight request; no result is
//! delivered and the transport resources are released.

use async_trait::async_trait;
use chrono::{Local, NaiveDate, TimeZone};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::conditions::Conditions;
use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::models::{ConditionRecord, ForecastResponse};

/// Forecast query operations, the seam for test doubles
#[async_trait]
pub trait ForecastApi: Send + Sync {
    /// Get current conditions at the given coordinates
    async fn get_current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Conditions, ForecastError>;

    /// Get hourly conditions for the current local calendar day
    async fn get_forecast_today(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Conditions>, ForecastError>;

    /// Get daily conditions for the coming week
    async fn get_forecast_week(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Conditions>, ForecastError>;
}

/// Forecast.io HTTP client
///
/// The endpoint is resolved once at construction and immutable afterwards;
/// a single client is safe to share across concurrent requests. Calls are
/// independent, with no request queue or de-duplication.
#[derive(Debug)]
pub struct ForecastClient {
    client: Client,
    endpoint: String,
    legacy_query: bool,
}

impl ForecastClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Configuration`] unless exactly one of
    /// `api_key` and `proxy_url` is set, or [`ForecastError::ConnectionFailed`]
    /// if the HTTP client cannot be initialized.
    pub fn new(config: ForecastConfig) -> Result<Self, ForecastError> {
        let endpoint = config.endpoint()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            legacy_query: config.legacy_query,
        })
    }

    /// The resolved endpoint base URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw forecast document for the given coordinates
    ///
    /// Builds the request URL, issues one GET and returns the unparsed
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidCoordinates`] for non-finite input,
    /// a transport error for connection failures and non-success statuses
    /// (5xx maps to [`ForecastError::ServiceUnavailable`]).
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn request_data(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, ForecastError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_request_url(latitude, longitude);
        debug!(url = %url, "Fetching forecast");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ForecastError::ConnectionFailed(e.to_string())
            } else {
                ForecastError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_server_error() {
            return Err(ForecastError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ForecastError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| ForecastError::ConnectionFailed(e.to_string()))
    }

    /// Coordinates must be finite; geographic range is the caller's concern
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ForecastError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ForecastError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the request URL for the given coordinates
    fn build_request_url(&self, latitude: f64, longitude: f64) -> String {
        if self.legacy_query {
            // Upstream proxy scripts expect this exact shape, including the
            // second `?` where `&` belongs.
            format!(
                "{}?url={latitude},{longitude}?units=auto",
                self.endpoint
            )
        } else {
            format!("{}{latitude},{longitude}?units=auto", self.endpoint)
        }
    }

    fn parse_body(body: &str) -> Result<ForecastResponse, ForecastError> {
        serde_json::from_str(body).map_err(|e| ForecastError::ParseError(e.to_string()))
    }

    /// Keep the records whose timestamp falls on `date` in the local zone,
    /// preserving input order. Records without a timestamp cannot be
    /// attributed to a day and are dropped.
    fn filter_by_local_date(records: Vec<ConditionRecord>, date: NaiveDate) -> Vec<Conditions> {
        records
            .into_iter()
            .filter(|record| {
                record.time.is_some_and(|time| {
                    Local
                        .timestamp_opt(time, 0)
                        .single()
                        .is_some_and(|dt| dt.date_naive() == date)
                })
            })
            .map(Conditions::new)
            .collect()
    }
}

#[async_trait]
impl ForecastApi for ForecastClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Conditions, ForecastError> {
        let body = self.request_data(latitude, longitude).await?;
        let response = Self::parse_body(&body)?;

        let currently = response.currently.ok_or_else(|| {
            ForecastError::ParseError("no current conditions in response".to_string())
        })?;

        Ok(Conditions::new(currently))
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast_today(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Conditions>, ForecastError> {
        let body = self.request_data(latitude, longitude).await?;
        let response = Self::parse_body(&body)?;

        let hourly = response
            .hourly
            .ok_or_else(|| ForecastError::ParseError("no hourly data in response".to_string()))?;

        let today = Local::now().date_naive();
        Ok(Self::filter_by_local_date(hourly.data, today))
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast_week(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Conditions>, ForecastError> {
        let body = self.request_data(latitude, longitude).await?;
        let response = Self::parse_body(&body)?;

        let daily = response
            .daily
            .ok_or_else(|| ForecastError::ParseError("no daily data in response".to_string()))?;

        Ok(daily.data.into_iter().map(Conditions::new).collect())
    }
}
