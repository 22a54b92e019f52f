use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{BACKGROUND, ChartError, WIND_FILE, date_labels};
use crate::model::ForecastDay;

const WIND_COLOR: RGBColor = RGBColor(0x84, 0x5E, 0xC2);
const SCAFFOLD_STEPS: usize = 72;

/// Angle/radius pairs for the radial chart: day `i` of `n` sits at angle
/// `i·2π/n`, and the series is closed by repeating the first point so the
/// plotted outline joins up.
pub fn closed_loop(radii: &[f64]) -> Vec<(f64, f64)> {
    let n = radii.len();
    let mut series: Vec<(f64, f64)> =
        radii.iter().enumerate().map(|(i, &r)| (i as f64 * TAU / n as f64, r)).collect();
    if let Some(&first) = series.first() {
        series.push(first);
    }
    series
}

// Angles start at the top of the chart and run clockwise.
fn to_xy(theta: f64, r: f64) -> (f64, f64) {
    (r * theta.sin(), r * theta.cos())
}

/// Radial chart of each day's max wind speed.
pub fn render_wind(
    days: &[ForecastDay],
    location: &str,
    out_dir: &Path,
) -> Result<PathBuf, ChartError> {
    let path = out_dir.join(WIND_FILE);
    let labels = date_labels(days);
    let speeds: Vec<f64> = days.iter().map(|d| d.max_wind_kph).collect();

    let top = speeds.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let top = if top > 0.0 { top } else { 10.0 };
    let reach = top * 1.3;

    let root = BitMapBackend::new(&path, (960, 720)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    root.draw(&Text::new(
        format!("{location} max wind speed (km/h)"),
        (480, 20),
        TextStyle::from(("sans-serif", 28).into_font()).pos(Pos::new(HPos::Center, VPos::Top)),
    ))?;

    // Asymmetric margins carve a square plot area out of the 960x720 canvas,
    // so the rings come out as circles.
    let mut chart = ChartBuilder::on(&root)
        .margin_left(168)
        .margin_right(168)
        .margin_top(64)
        .margin_bottom(32)
        .build_cartesian_2d(-reach..reach, -reach..reach)?;

    // Polar scaffolding drawn by hand: three reference rings and one spoke
    // per day, labeled with the day's date at the rim.
    let ring_color = BLACK.mix(0.5);
    let ring_style = TextStyle::from(("sans-serif", 13).into_font()).color(&ring_color);
    for step in 1..=3 {
        let r = top * f64::from(step) / 3.0;
        let ring: Vec<(f64, f64)> =
            (0..=SCAFFOLD_STEPS).map(|k| to_xy(k as f64 * TAU / SCAFFOLD_STEPS as f64, r)).collect();
        chart.draw_series(std::iter::once(PathElement::new(
            ring,
            BLACK.mix(0.2).stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{r:.0}"),
            (0.0, r),
            ring_style.clone(),
        )))?;
    }

    let spoke_label = TextStyle::from(("sans-serif", 15).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (i, label) in labels.iter().enumerate() {
        let theta = i as f64 * TAU / labels.len() as f64;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), to_xy(theta, top * 1.05)],
            BLACK.mix(0.15).stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            to_xy(theta, top * 1.18),
            spoke_label.clone(),
        )))?;
    }

    let outline: Vec<(f64, f64)> =
        closed_loop(&speeds).into_iter().map(|(theta, r)| to_xy(theta, r)).collect();
    if !outline.is_empty() {
        chart.draw_series(std::iter::once(Polygon::new(
            outline.clone(),
            WIND_COLOR.mix(0.15).filled(),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            outline.clone(),
            WIND_COLOR.stroke_width(2),
        )))?;
        chart.draw_series(
            outline.iter().map(|&point| Circle::new(point, 4, WIND_COLOR.filled())),
        )?;
    }

    drop(chart);
    root.present()?;
    drop(root);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_loop_repeats_the_first_point() {
        let radii = [12.0, 9.5, 20.1, 7.0, 14.2, 11.8, 16.3];
        let series = closed_loop(&radii);

        assert_eq!(series.len(), 8);
        assert_eq!(series.last(), series.first());
        assert_eq!(series[0], (0.0, 12.0));
    }

    #[test]
    fn closed_loop_spaces_days_evenly() {
        let series = closed_loop(&[1.0; 7]);
        for (i, &(theta, _)) in series.iter().take(7).enumerate() {
            assert!((theta - i as f64 * TAU / 7.0).abs() < 1e-12);
        }
    }

    #[test]
    fn closed_loop_of_nothing_is_empty() {
        assert!(closed_loop(&[]).is_empty());
    }
}
