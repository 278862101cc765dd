//! Forecast.io weather client
//!
//! Typed async client for the forecast.io (Dark Sky) weather API:
//! current conditions, today's hourly forecast, and the week's daily
//! forecast, each returned as read-only [`Conditions`] views over the
//! provider's records.
//!
//! Credentials are resolved at construction: either an API key (embedded
//! in every request URL) or a proxy base URL that keeps the key
//! server-side — exactly one must be set.
//!
//! ```no_run
//! use forecast_io::{ForecastApi, ForecastClient, ForecastConfig};
//!
//! # async fn example() -> Result<(), forecast_io::ForecastError> {
//! let client = ForecastClient::new(ForecastConfig::with_api_key("your-key"))?;
//! let current = client.get_current_conditions(52.52, 13.405).await?;
//! if let Some(summary) = current.summary() {
//!     println!("{summary}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod conditions;
pub mod config;
pub mod error;
mod models;

pub use client::{ForecastApi, ForecastClient};
pub use conditions::Conditions;
pub use config::ForecastConfig;
pub use error::ForecastError;
pub use models::{ConditionRecord, DataBlock, ForecastResponse};
