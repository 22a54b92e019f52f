use std::path::{Path, PathBuf};

use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{BACKGROUND, CONDITIONS_FILE, ChartError};
use crate::model::ForecastDay;

// Pastel wedge palette, cycled when there are more conditions than entries.
const PALETTE: [RGBColor; 9] = [
    RGBColor(0xFB, 0xB4, 0xAE),
    RGBColor(0xB3, 0xCD, 0xE3),
    RGBColor(0xCC, 0xEB, 0xC5),
    RGBColor(0xDE, 0xCB, 0xE4),
    RGBColor(0xFE, 0xD9, 0xA6),
    RGBColor(0xFF, 0xFF, 0xCC),
    RGBColor(0xE5, 0xD8, 0xBD),
    RGBColor(0xFD, 0xDA, 0xEC),
    RGBColor(0xF2, 0xF2, 0xF2),
];

/// Count how often each condition text occurs, in first-appearance order.
pub fn condition_tally(days: &[ForecastDay]) -> Vec<(String, usize)> {
    let mut tally: Vec<(String, usize)> = Vec::new();
    for day in days {
        match tally.iter_mut().find(|(text, _)| *text == day.condition_text) {
            Some((_, count)) => *count += 1,
            None => tally.push((day.condition_text.clone(), 1)),
        }
    }
    tally
}

/// Pie of the week's condition distribution, wedge percentages at one decimal.
pub fn render_conditions(
    days: &[ForecastDay],
    location: &str,
    out_dir: &Path,
) -> Result<PathBuf, ChartError> {
    let path = out_dir.join(CONDITIONS_FILE);
    let tally = condition_tally(days);

    let root = BitMapBackend::new(&path, (960, 720)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    root.draw(&Text::new(
        format!("{location} condition distribution"),
        (480, 24),
        TextStyle::from(("sans-serif", 28).into_font()).pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;

    if !tally.is_empty() {
        let sizes: Vec<f64> = tally.iter().map(|(_, count)| *count as f64).collect();
        let colors: Vec<RGBColor> =
            (0..tally.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();
        let labels: Vec<String> = tally.iter().map(|(text, _)| text.clone()).collect();

        let center = (480, 390);
        let radius = 250.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(90.0);
        pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 16).into_font().color(&BLACK));
        root.draw(&pie)?;
    }

    root.present()?;
    drop(root);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(offset: u32, condition: &str) -> ForecastDay {
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2025, 7, 1 + offset).unwrap(),
            max_temp_c: 30.0,
            min_temp_c: 20.0,
            avg_humidity: 50.0,
            chance_of_rain: 10.0,
            max_wind_kph: 15.0,
            condition_text: condition.to_string(),
            sunrise: "05:50 AM".to_string(),
            sunset: "07:21 PM".to_string(),
        }
    }

    #[test]
    fn tally_counts_in_first_appearance_order() {
        let conditions = ["Sunny", "Sunny", "Rain", "Sunny", "Cloudy", "Rain", "Sunny"];
        let days: Vec<ForecastDay> =
            conditions.iter().enumerate().map(|(i, c)| day(i as u32, c)).collect();

        let tally = condition_tally(&days);

        assert_eq!(
            tally,
            vec![
                ("Sunny".to_string(), 4),
                ("Rain".to_string(), 2),
                ("Cloudy".to_string(), 1),
            ]
        );
        assert_eq!(tally.iter().map(|(_, count)| count).sum::<usize>(), 7);
    }

    #[test]
    fn tally_of_no_days_is_empty() {
        assert!(condition_tally(&[]).is_empty());
    }
}
