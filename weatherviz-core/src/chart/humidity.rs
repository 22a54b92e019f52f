use std::path::{Path, PathBuf};

use plotters::prelude::*;

use super::{BACKGROUND, ChartError, HUMIDITY_RAIN_FILE, date_labels, index_label};
use crate::model::ForecastDay;

const HUMIDITY_COLOR: RGBColor = RGBColor(0x6B, 0xCB, 0x77);
const RAIN_COLOR: RGBColor = RGBColor(0x4D, 0x96, 0xFF);

/// Dual-axis line chart: humidity on the left axis, chance of rain on the
/// right, both over the same day categories. Both quantities are
/// percentages, so the two axes share the 0–100 range.
pub fn render_humidity_rain(
    days: &[ForecastDay],
    location: &str,
    out_dir: &Path,
) -> Result<PathBuf, ChartError> {
    let path = out_dir.join(HUMIDITY_RAIN_FILE);
    let labels = date_labels(days);
    let n = days.len();
    let x_range = -0.5..(n.max(1) as f64 - 0.5);

    let root = BitMapBackend::new(&path, (1000, 500)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{location} humidity and chance of rain"), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .right_y_label_area_size(48)
        .build_cartesian_2d(x_range.clone(), 0.0..100.0)?
        .set_secondary_coord(x_range, 0.0..100.0);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.max(2))
        .x_label_formatter(&|x| index_label(&labels, *x))
        .y_desc("Humidity (%)")
        .draw()?;
    chart.configure_secondary_axes().y_desc("Chance of rain (%)").draw()?;

    chart
        .draw_series(LineSeries::new(
            (0..n).map(|i| (i as f64, days[i].avg_humidity)),
            HUMIDITY_COLOR.stroke_width(2),
        ))?
        .label("Humidity (%)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], HUMIDITY_COLOR.stroke_width(2))
        });
    chart.draw_series(
        (0..n).map(|i| Circle::new((i as f64, days[i].avg_humidity), 4, HUMIDITY_COLOR.filled())),
    )?;

    chart
        .draw_secondary_series(LineSeries::new(
            (0..n).map(|i| (i as f64, days[i].chance_of_rain)),
            RAIN_COLOR.stroke_width(2),
        ))?
        .label("Chance of rain (%)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], RAIN_COLOR.stroke_width(2)));
    chart.draw_secondary_series(
        (0..n).map(|i| Circle::new((i as f64, days[i].chance_of_rain), 4, RAIN_COLOR.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK.mix(0.4))
        .draw()?;

    drop(chart);
    root.present()?;
    drop(root);
    Ok(path)
}
