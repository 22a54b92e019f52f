use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input to a forecast fetch: which place, how many days.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    pub city: String,
    pub days: u8,
}

impl ForecastRequest {
    /// The request the CLI always makes: a full week.
    pub fn seven_day(city: impl Into<String>) -> Self {
        Self { city: city.into(), days: 7 }
    }
}

/// The weather snapshot for "now", separate from the multi-day forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition_text: String,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_dir: String,
}

/// One calendar day's aggregated forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub avg_humidity: f64,
    pub chance_of_rain: f64,
    pub max_wind_kph: f64,
    pub condition_text: String,
    /// Clock strings exactly as reported upstream, e.g. "05:50 AM".
    /// Parsed lazily by the sunrise/sunset chart so a malformed value
    /// cannot fail the fetch or shift day alignment.
    pub sunrise: String,
    pub sunset: String,
}

/// Everything one fetch produces. The `days` sequence keeps the upstream
/// order; every renderer consumes it positionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    pub location_name: String,
    pub current: CurrentConditions,
    pub days: Vec<ForecastDay>,
}
