use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::{BACKGROUND, ChartError, SUN_FILE, date_labels, index_label};
use crate::model::ForecastDay;
use crate::timefmt;

const SUNRISE_COLOR: RGBColor = RGBColor(0xFF, 0xC1, 0x54);
const SUNSET_COLOR: RGBColor = RGBColor(0x47, 0xB3, 0x9C);
const BAR_WIDTH: f64 = 0.35;

// Clock labels only at the even hours between 04:00 and 20:00; everything
// else on the axis stays unlabeled.
fn clock_label(h: f64) -> String {
    let rounded = h.round();
    if (h - rounded).abs() > 1e-6 {
        return String::new();
    }
    let hour = rounded as i32;
    if (4..=20).contains(&hour) && hour % 2 == 0 { format!("{hour}:00") } else { String::new() }
}

/// Grouped sunrise/sunset bars per day. Bar heights come from the clock-time
/// parser; a malformed upstream string renders as a zero-height bar rather
/// than failing the chart.
pub fn render_sun_times(
    days: &[ForecastDay],
    location: &str,
    out_dir: &Path,
) -> Result<PathBuf, ChartError> {
    let path = out_dir.join(SUN_FILE);
    let labels = date_labels(days);
    let n = days.len();

    let sunrises: Vec<f64> = days.iter().map(|d| timefmt::hours_or_midnight(&d.sunrise)).collect();
    let sunsets: Vec<f64> = days.iter().map(|d| timefmt::hours_or_midnight(&d.sunset)).collect();

    let root = BitMapBackend::new(&path, (1000, 500)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{location} sunrise and sunset"), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(56)
        .build_cartesian_2d(-0.75..(n.max(1) as f64 - 0.25), 0.0..24.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.max(2))
        .x_label_formatter(&|x| index_label(&labels, *x))
        .y_labels(13)
        .y_label_formatter(&|h| clock_label(*h))
        .y_desc("Time of day")
        .draw()?;

    chart
        .draw_series((0..n).map(|i| {
            let x = i as f64;
            Rectangle::new([(x - BAR_WIDTH, 0.0), (x, sunrises[i])], SUNRISE_COLOR.filled())
        }))?
        .label("Sunrise")
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], SUNRISE_COLOR.filled()));
    chart
        .draw_series((0..n).map(|i| {
            let x = i as f64;
            Rectangle::new([(x, 0.0), (x + BAR_WIDTH, sunsets[i])], SUNSET_COLOR.filled())
        }))?
        .label("Sunset")
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], SUNSET_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK.mix(0.4))
        .draw()?;

    drop(chart);
    root.present()?;
    drop(root);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_labels_cover_working_hours_only() {
        assert_eq!(clock_label(4.0), "4:00");
        assert_eq!(clock_label(20.0), "20:00");
        assert_eq!(clock_label(12.0), "12:00");
        assert_eq!(clock_label(2.0), "");
        assert_eq!(clock_label(22.0), "");
        assert_eq!(clock_label(5.0), "");
        assert_eq!(clock_label(7.5), "");
    }
}
