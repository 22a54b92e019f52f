use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use weatherviz_core::{
    ForecastProvider, ForecastRequest, WeatherApiClient,
    config::{self, Config},
};

use crate::report;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherviz", version, about = "7-day forecast chart generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and an optional default city.
    Configure,

    /// Fetch the forecast and render the chart set.
    Render {
        /// City name; falls back to WEATHERVIZ_CITY or the configured default.
        city: Option<String>,

        /// API key; falls back to WEATHERVIZ_API_KEY or the configured key.
        #[arg(long)]
        api_key: Option<String>,

        /// Directory the PNG files are written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Render { city, api_key, out_dir } => {
                let cfg = Config::load()?;
                let api_key = config::resolve_api_key(
                    api_key,
                    std::env::var(config::API_KEY_ENV).ok(),
                    &cfg,
                )?;
                let city = config::resolve_city(city, std::env::var(config::CITY_ENV).ok(), &cfg)?;

                let provider = WeatherApiClient::new(api_key);
                render(&provider, &city, &out_dir).await
            }
        }
    }
}

/// Fetch, summarize, render. Split from `run` so tests can drive it with a
/// stub provider. A failed fetch stops the run before any chart is written.
async fn render(
    provider: &dyn ForecastProvider,
    city: &str,
    out_dir: &Path,
) -> anyhow::Result<()> {
    println!("Fetching weather data for {city}...");

    let request = ForecastRequest::seven_day(city);
    let result = provider
        .fetch_forecast(&request)
        .await
        .context("could not fetch the forecast; no charts were produced")?;

    println!();
    println!("{}", report::current_block(&result));
    println!();
    println!("=== 7-day forecast ===");
    for day in &result.days {
        println!("{}", report::day_line(day));
    }

    println!();
    println!("Rendering charts...");
    let written = weatherviz_core::render_all(&result.days, &result.location_name, out_dir)?;

    println!("Charts written:");
    for path in &written {
        println!("- {}", path.display());
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key =
        inquire::Password::new("WeatherAPI.com key:").without_confirmation().prompt()?;
    let city = inquire::Text::new("Default city (leave empty to skip):").prompt()?;

    cfg.api_key = Some(api_key);
    cfg.default_city =
        if city.trim().is_empty() { None } else { Some(city.trim().to_string()) };
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use weatherviz_core::{CurrentConditions, FetchError, ForecastDay, ForecastResult};

    #[derive(Debug)]
    struct StubProvider {
        outcome: Result<ForecastResult, FetchError>,
    }

    #[async_trait]
    impl ForecastProvider for StubProvider {
        async fn fetch_forecast(
            &self,
            _request: &ForecastRequest,
        ) -> Result<ForecastResult, FetchError> {
            match &self.outcome {
                Ok(result) => Ok(result.clone()),
                Err(FetchError::Api(message)) => Err(FetchError::Api(message.clone())),
                Err(_) => unreachable!("stub only carries Api errors"),
            }
        }
    }

    fn fixture_result() -> ForecastResult {
        let days = (1..=7)
            .map(|d| ForecastDay {
                date: NaiveDate::from_ymd_opt(2025, 7, d).unwrap(),
                max_temp_c: 30.0 + f64::from(d),
                min_temp_c: 20.0,
                avg_humidity: 55.0,
                chance_of_rain: 25.0,
                max_wind_kph: 14.0,
                condition_text: "Sunny".to_string(),
                sunrise: "05:50 AM".to_string(),
                sunset: "07:21 PM".to_string(),
            })
            .collect();

        ForecastResult {
            location_name: "Zhengzhou".to_string(),
            current: CurrentConditions {
                temp_c: 28.3,
                feelslike_c: 30.1,
                condition_text: "Partly cloudy".to_string(),
                humidity: 62,
                wind_kph: 11.2,
                wind_dir: "SE".to_string(),
            },
            days,
        }
    }

    #[tokio::test]
    async fn render_writes_the_chart_set() {
        let provider = StubProvider { outcome: Ok(fixture_result()) };
        let out = tempfile::tempdir().unwrap();

        render(&provider, "Zhengzhou", out.path()).await.unwrap();

        for name in [
            "temperature.png",
            "weather_conditions.png",
            "humidity_rain.png",
            "wind_speed.png",
            "sunrise_sunset.png",
        ] {
            assert!(out.path().join(name).exists(), "{name} missing");
        }
    }

    #[tokio::test]
    async fn failed_fetch_stops_before_rendering() {
        let provider =
            StubProvider { outcome: Err(FetchError::Api("q parameter missing".to_string())) };
        let out = tempfile::tempdir().unwrap();

        let err = render(&provider, "Zhengzhou", out.path()).await.unwrap_err();

        assert!(err.to_string().contains("no charts were produced"));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
