//! Wire types for the forecast.io response
//!
//! The provider returns one JSON document with a `currently` record plus
//! `hourly` and `daily` blocks. Every field is optional at the type level
//! because the blocks carry different subsets (hourly records have no
//! min/max temperature, current conditions have no sunrise/sunset).

use serde::{Deserialize, Serialize};

/// Top-level forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Current conditions at the requested coordinates
    pub currently: Option<ConditionRecord>,
    /// Hour-by-hour forecast block
    pub hourly: Option<DataBlock>,
    /// Day-by-day forecast block
    pub daily: Option<DataBlock>,
}

/// A forecast block: an ordered array of condition records
#[derive(Debug, Clone, Deserialize)]
pub struct DataBlock {
    /// Records in provider order (chronological)
    pub data: Vec<ConditionRecord>,
}

/// One provider-defined weather data point
///
/// Values are carried verbatim; no unit conversion or defaulting happens
/// at this layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    /// Temperature in the requested units
    pub temperature: Option<f64>,
    /// Minimum temperature (daily records only)
    pub temperature_min: Option<f64>,
    /// Maximum temperature (daily records only)
    pub temperature_max: Option<f64>,
    /// Human-readable summary
    pub summary: Option<String>,
    /// Machine-readable icon name
    pub icon: Option<String>,
    /// Unix timestamp in seconds
    pub time: Option<i64>,
    /// Sea-level pressure in hPa
    pub pressure: Option<f64>,
    /// Relative humidity (0..1)
    pub humidity: Option<f64>,
    /// Wind speed in the requested units
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees
    pub wind_bearing: Option<f64>,
    /// Precipitation type (rain, snow, sleet)
    pub precip_type: Option<String>,
    /// Probability of precipitation (0..1)
    pub precip_probability: Option<f64>,
    /// Precipitation intensity
    pub precip_intensity: Option<f64>,
    /// Cloud cover (0..1)
    pub cloud_cover: Option<f64>,
    /// Dew point temperature
    pub dew_point: Option<f64>,
    /// Ozone column in Dobson units
    pub ozone: Option<f64>,
    /// Sunrise as unix seconds (daily records only)
    pub sunrise_time: Option<i64>,
    /// Sunset as unix seconds (daily records only)
    pub sunset_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "time": 1700000000,
            "summary": "Clear",
            "temperature": 21.5,
            "windSpeed": 4.2,
            "windBearing": 180,
            "precipProbability": 0.05,
            "cloudCover": 0.1,
            "dewPoint": 12.3
        }"#;

        let record: ConditionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time, Some(1_700_000_000));
        assert_eq!(record.summary.as_deref(), Some("Clear"));
        assert_eq!(record.wind_speed, Some(4.2));
        assert_eq!(record.wind_bearing, Some(180.0));
        assert!(record.temperature_min.is_none());
        assert!(record.sunrise_time.is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"time": 1700000000, "nearestStormDistance": 37}"#;
        let record: ConditionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time, Some(1_700_000_000));
    }

    #[test]
    fn test_deserialize_response_with_missing_blocks() {
        let json = r#"{"currently": {"temperature": 5.5}}"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert!(response.currently.is_some());
        assert!(response.hourly.is_none());
        assert!(response.daily.is_none());
    }
}
