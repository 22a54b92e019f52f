//! Chart generation for the 7-day forecast.
//!
//! Each submodule is a stateless transform from the forecast-day sequence to
//! one PNG file. The renderers share nothing but the date-label helper and
//! the output directory, so they can run in any order. All of them consume
//! `days` positionally; helpers map over the sequence and never filter it,
//! which keeps every series aligned with the date labels.

use std::path::{Path, PathBuf};

use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use crate::model::ForecastDay;

mod conditions;
mod humidity;
mod sun;
mod temperature;
mod wind;

pub use conditions::{condition_tally, render_conditions};
pub use humidity::render_humidity_rain;
pub use sun::render_sun_times;
pub use temperature::render_temperature;
pub use wind::{closed_loop, render_wind};

pub const TEMPERATURE_FILE: &str = "temperature.png";
pub const CONDITIONS_FILE: &str = "weather_conditions.png";
pub const HUMIDITY_RAIN_FILE: &str = "humidity_rain.png";
pub const WIND_FILE: &str = "wind_speed.png";
pub const SUN_FILE: &str = "sunrise_sunset.png";

/// Shared canvas background.
pub(crate) const BACKGROUND: RGBColor = RGBColor(0xF5, 0xF5, 0xF5);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to draw chart: {0}")]
    Draw(String),

    #[error("could not create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(err.to_string())
    }
}

/// x-axis labels shared by every renderer: one "MM-DD" label per day.
pub fn date_labels(days: &[ForecastDay]) -> Vec<String> {
    days.iter().map(|day| day.date.format("%m-%d").to_string()).collect()
}

/// Format an axis position as the day label it corresponds to. Positions
/// that don't land on a day index come out empty, so the mesh only labels
/// the categories.
pub(crate) fn index_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Render the full chart set into `out_dir`, returning the written paths in
/// a fixed order. A failing renderer is fatal: the error propagates and the
/// remaining charts are not attempted.
pub fn render_all(
    days: &[ForecastDay],
    location: &str,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ChartError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ChartError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    Ok(vec![
        render_temperature(days, location, out_dir)?,
        render_conditions(days, location, out_dir)?,
        render_humidity_rain(days, location, out_dir)?,
        render_wind(days, location, out_dir)?,
        render_sun_times(days, location, out_dir)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(date: &str) -> ForecastDay {
        ForecastDay {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            max_temp_c: 30.0,
            min_temp_c: 20.0,
            avg_humidity: 50.0,
            chance_of_rain: 10.0,
            max_wind_kph: 15.0,
            condition_text: "Sunny".to_string(),
            sunrise: "05:50 AM".to_string(),
            sunset: "07:21 PM".to_string(),
        }
    }

    #[test]
    fn date_labels_keep_month_and_day() {
        let days = vec![day("2025-07-01"), day("2025-07-02"), day("2025-12-31")];
        assert_eq!(date_labels(&days), vec!["07-01", "07-02", "12-31"]);
    }

    #[test]
    fn index_label_only_hits_day_positions() {
        let labels = vec!["07-01".to_string(), "07-02".to_string()];
        assert_eq!(index_label(&labels, 0.0), "07-01");
        assert_eq!(index_label(&labels, 1.0), "07-02");
        assert_eq!(index_label(&labels, 0.5), "");
        assert_eq!(index_label(&labels, -1.0), "");
        assert_eq!(index_label(&labels, 5.0), "");
    }
}
