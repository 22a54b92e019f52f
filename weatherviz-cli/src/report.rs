//! Human-readable console output. No machine-readable format is produced.

use weatherviz_core::{ForecastDay, ForecastResult};

/// The current-conditions block printed before the per-day lines.
pub fn current_block(result: &ForecastResult) -> String {
    let current = &result.current;
    format!(
        "=== Current weather ===\n\
         Location: {}\n\
         Temperature: {:.1}°C (feels like {:.1}°C)\n\
         Condition: {}\n\
         Humidity: {}% | Wind: {:.1} km/h {}",
        result.location_name,
        current.temp_c,
        current.feelslike_c,
        current.condition_text,
        current.humidity,
        current.wind_kph,
        current.wind_dir,
    )
}

/// One summary line per forecast day.
pub fn day_line(day: &ForecastDay) -> String {
    format!(
        "{}: {} | {:.1}~{:.1}°C | humidity {:.0}% | rain {:.0}%",
        day.date,
        day.condition_text,
        day.min_temp_c,
        day.max_temp_c,
        day.avg_humidity,
        day.chance_of_rain,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weatherviz_core::CurrentConditions;

    #[test]
    fn current_block_carries_every_field() {
        let result = ForecastResult {
            location_name: "Zhengzhou".to_string(),
            current: CurrentConditions {
                temp_c: 28.3,
                feelslike_c: 30.1,
                condition_text: "Partly cloudy".to_string(),
                humidity: 62,
                wind_kph: 11.2,
                wind_dir: "SE".to_string(),
            },
            days: Vec::new(),
        };

        let block = current_block(&result);
        assert!(block.contains("Zhengzhou"));
        assert!(block.contains("28.3°C (feels like 30.1°C)"));
        assert!(block.contains("Partly cloudy"));
        assert!(block.contains("62% | Wind: 11.2 km/h SE"));
    }

    #[test]
    fn day_line_is_compact() {
        let day = ForecastDay {
            date: NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
            max_temp_c: 33.2,
            min_temp_c: 24.1,
            avg_humidity: 45.0,
            chance_of_rain: 20.0,
            max_wind_kph: 14.0,
            condition_text: "Sunny".to_string(),
            sunrise: "05:50 AM".to_string(),
            sunset: "07:21 PM".to_string(),
        };

        assert_eq!(day_line(&day), "2025-07-03: Sunny | 24.1~33.2°C | humidity 45% | rain 20%");
    }
}
