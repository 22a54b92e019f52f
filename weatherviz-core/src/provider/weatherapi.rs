use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use super::{FetchError, ForecastProvider};
use crate::model::{CurrentConditions, ForecastDay, ForecastRequest, ForecastResult};

const BASE_URL: &str = "http://api.weatherapi.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Point the client at a different host; tests use this with a mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::builder().timeout(REQUEST_TIMEOUT).build().expect("reqwest client"),
        }
    }
}

#[async_trait]
impl ForecastProvider for WeatherApiClient {
    /// One GET against `forecast.json`, no retry. The day count is passed
    /// through as upstream returned it, even when it differs from the request.
    async fn fetch_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResult, FetchError> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = request.days.to_string();

        log::debug!("requesting {}-day forecast for {:?}", request.days, request.city);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", request.city.as_str()),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        // WeatherAPI reports failures as an `error` object, usually together
        // with a non-2xx status. Check the body first so the upstream message
        // wins over the bare status code.
        if let Ok(envelope) = serde_json::from_str::<WaErrorEnvelope>(&body) {
            return Err(FetchError::Api(envelope.error.message));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let parsed: WaForecastResponse = serde_json::from_str(&body)?;
        log::debug!(
            "received {} forecast day(s) for {:?}",
            parsed.forecast.forecastday.len(),
            parsed.location.name
        );

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct WaErrorEnvelope {
    error: WaError,
}

#[derive(Debug, Deserialize)]
struct WaError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_kph: f64,
    wind_dir: String,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: NaiveDate,
    day: WaDay,
    astro: WaAstro,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    avghumidity: f64,
    daily_chance_of_rain: f64,
    maxwind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaAstro {
    sunrise: String,
    sunset: String,
}

impl From<WaForecastResponse> for ForecastResult {
    fn from(raw: WaForecastResponse) -> Self {
        let days = raw
            .forecast
            .forecastday
            .into_iter()
            .map(|entry| ForecastDay {
                date: entry.date,
                max_temp_c: entry.day.maxtemp_c,
                min_temp_c: entry.day.mintemp_c,
                avg_humidity: entry.day.avghumidity,
                chance_of_rain: entry.day.daily_chance_of_rain,
                max_wind_kph: entry.day.maxwind_kph,
                condition_text: entry.day.condition.text,
                sunrise: entry.astro.sunrise,
                sunset: entry.astro.sunset,
            })
            .collect();

        Self {
            location_name: raw.location.name,
            current: CurrentConditions {
                temp_c: raw.current.temp_c,
                feelslike_c: raw.current.feelslike_c,
                condition_text: raw.current.condition.text,
                humidity: raw.current.humidity,
                wind_kph: raw.current.wind_kph,
                wind_dir: raw.current.wind_dir,
            },
            days,
        }
    }
}
