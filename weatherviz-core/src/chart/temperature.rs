use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{BACKGROUND, ChartError, TEMPERATURE_FILE, date_labels, index_label};
use crate::model::ForecastDay;

const MAX_COLOR: RGBColor = RGBColor(0xFF, 0x6B, 0x6B);
const MIN_COLOR: RGBColor = RGBColor(0x4D, 0x96, 0xFF);
const BAND_COLOR: RGBColor = RGBColor(0xFF, 0xD9, 0x3D);

/// Offset of the per-point value labels, in °C above/below the marker.
const LABEL_OFFSET_C: f64 = 0.5;

/// Daily max/min lines with the span between them filled and a value label
/// on every marker.
pub fn render_temperature(
    days: &[ForecastDay],
    location: &str,
    out_dir: &Path,
) -> Result<PathBuf, ChartError> {
    let path = out_dir.join(TEMPERATURE_FILE);
    let labels = date_labels(days);
    let n = days.len();

    let maxs: Vec<f64> = days.iter().map(|d| d.max_temp_c).collect();
    let mins: Vec<f64> = days.iter().map(|d| d.min_temp_c).collect();

    // Pad the range so the offset labels stay inside the plot area.
    let y_lo = mins.iter().copied().reduce(f64::min).unwrap_or(0.0) - 2.5;
    let y_hi = maxs.iter().copied().reduce(f64::max).unwrap_or(20.0) + 2.5;

    let root = BitMapBackend::new(&path, (1000, 500)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{location} 7-day temperature"), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(-0.5..(n.max(1) as f64 - 0.5), y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.max(2))
        .x_label_formatter(&|x| index_label(&labels, *x))
        .y_desc("Temperature (°C)")
        .draw()?;

    if n > 0 {
        let band: Vec<(f64, f64)> = (0..n)
            .map(|i| (i as f64, maxs[i]))
            .chain((0..n).rev().map(|i| (i as f64, mins[i])))
            .collect();
        chart.draw_series(std::iter::once(Polygon::new(band, BAND_COLOR.mix(0.15).filled())))?;
    }

    chart
        .draw_series(LineSeries::new(
            (0..n).map(|i| (i as f64, maxs[i])),
            MAX_COLOR.stroke_width(2),
        ))?
        .label("Max temp")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], MAX_COLOR.stroke_width(2)));
    chart
        .draw_series(LineSeries::new(
            (0..n).map(|i| (i as f64, mins[i])),
            MIN_COLOR.stroke_width(2),
        ))?
        .label("Min temp")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], MIN_COLOR.stroke_width(2)));

    chart.draw_series((0..n).map(|i| Circle::new((i as f64, maxs[i]), 4, MAX_COLOR.filled())))?;
    chart.draw_series((0..n).map(|i| Circle::new((i as f64, mins[i]), 4, MIN_COLOR.filled())))?;

    let above = TextStyle::from(("sans-serif", 14).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let below =
        TextStyle::from(("sans-serif", 14).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    chart.draw_series((0..n).map(|i| {
        Text::new(
            format!("{:.1}°C", maxs[i]),
            (i as f64, maxs[i] + LABEL_OFFSET_C),
            above.clone(),
        )
    }))?;
    chart.draw_series((0..n).map(|i| {
        Text::new(
            format!("{:.1}°C", mins[i]),
            (i as f64, mins[i] - LABEL_OFFSET_C),
            below.clone(),
        )
    }))?;

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
