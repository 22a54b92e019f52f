//! Abstraction over forecast sources, plus the WeatherAPI.com implementation.

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::model::{ForecastRequest, ForecastResult};

pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

/// Why a fetch produced no forecast. All variants are terminal for the run:
/// the caller reports the message and renders nothing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to the weather service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with an explicit `error` object; carries the
    /// upstream message verbatim.
    #[error("weather service reported an error: {0}")]
    Api(String),

    #[error("weather service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode the weather service response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResult, FetchError>;
}
