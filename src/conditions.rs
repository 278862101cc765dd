//! Read-only view over one condition record

use chrono::{Local, TimeZone};

use crate::models::ConditionRecord;

/// Read-only projection over one [`ConditionRecord`]
///
/// One accessor per recognized field, each returning the stored value
/// verbatim. Fields absent from the underlying record (an hourly record has
/// no min/max temperature, for example) return `None`.
#[derive(Debug, Clone)]
pub struct Conditions {
    record: ConditionRecord,
}

impl Conditions {
    /// Wrap one condition record
    #[must_use]
    pub const fn new(record: ConditionRecord) -> Self {
        Self { record }
    }

    /// Temperature in the requested units
    #[must_use]
    pub const fn temperature(&self) -> Option<f64> {
        self.record.temperature
    }

    /// Minimum temperature, only present on daily records
    #[must_use]
    pub const fn min_temperature(&self) -> Option<f64> {
        self.record.temperature_min
    }

    /// Maximum temperature, only present on daily records
    #[must_use]
    pub const fn max_temperature(&self) -> Option<f64> {
        self.record.temperature_max
    }

    /// Human-readable summary of the conditions
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.record.summary.as_deref()
    }

    /// Machine-readable icon name
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.record.icon.as_deref()
    }

    /// Observation time as unix seconds
    #[must_use]
    pub const fn time(&self) -> Option<i64> {
        self.record.time
    }

    /// Observation time rendered with a [`chrono::format::strftime`] pattern
    /// in the local time zone.
    ///
    /// Returns `None` when the record has no `time` field or the timestamp
    /// is outside the representable range.
    #[must_use]
    pub fn time_formatted(&self, format: &str) -> Option<String> {
        let time = self.record.time?;
        Local
            .timestamp_opt(time, 0)
            .single()
            .map(|dt| dt.format(format).to_string())
    }

    /// Sea-level pressure in hPa
    #[must_use]
    pub const fn pressure(&self) -> Option<f64> {
        self.record.pressure
    }

    /// Relative humidity (0..1)
    #[must_use]
    pub const fn humidity(&self) -> Option<f64> {
        self.record.humidity
    }

    /// Wind speed in the requested units
    #[must_use]
    pub const fn wind_speed(&self) -> Option<f64> {
        self.record.wind_speed
    }

    /// Wind direction in degrees
    #[must_use]
    pub const fn wind_bearing(&self) -> Option<f64> {
        self.record.wind_bearing
    }

    /// Precipitation type (rain, snow, sleet)
    #[must_use]
    pub fn precipitation_type(&self) -> Option<&str> {
        self.record.precip_type.as_deref()
    }

    /// Probability of precipitation (0..1)
    #[must_use]
    pub const fn precipitation_probability(&self) -> Option<f64> {
        self.record.precip_probability
    }

    /// Precipitation intensity
    #[must_use]
    pub const fn precipitation_intensity(&self) -> Option<f64> {
        self.record.precip_intensity
    }

    /// Cloud cover (0..1)
    #[must_use]
    pub const fn cloud_cover(&self) -> Option<f64> {
        self.record.cloud_cover
    }

    /// Dew point temperature
    #[must_use]
    pub const fn dew_point(&self) -> Option<f64> {
        self.record.dew_point
    }

    /// Ozone column in Dobson units
    #[must_use]
    pub const fn ozone(&self) -> Option<f64> {
        self.record.ozone
    }

    /// Sunrise as unix seconds, only present on daily records
    #[must_use]
    pub const fn sunrise(&self) -> Option<i64> {
        self.record.sunrise_time
    }

    /// Sunset as unix seconds, only present on daily records
    #[must_use]
    pub const fn sunset(&self) -> Option<i64> {
        self.record.sunset_time
    }

    /// The underlying record
    #[must_use]
    pub const fn raw(&self) -> &ConditionRecord {
        &self.record
    }
}

impl From<ConditionRecord> for Conditions {
    fn from(record: ConditionRecord) -> Self {
        Self::new(record)
    }
}
