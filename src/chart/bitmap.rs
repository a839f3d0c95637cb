// src/chart/bitmap.rs
//
// PNG rendering with plotters. Samples sit at integer x positions and are
// labelled with their sample label; lines are straight segments (no curve
// smoothing in plotters).

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{ChartBackend, ChartConfig};
use crate::config::style::parse_hex_color;
use crate::error::Error;

pub struct PngBackend {
    path: PathBuf,
    size: (u32, u32),
}

impl PngBackend {
    pub fn new(path: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self { path: path.into(), size }
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl ChartBackend for PngBackend {
    fn construct(&mut self, _surface: &str, config: &ChartConfig) -> Result<(), Error> {
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        draw_chart(&root, config)?;
        root.present()
            .map_err(|e| Error::Render(format!("Failed to present chart: {}", e)))?;
        logd!("Bitmap: wrote {}", self.path.display());
        Ok(())
    }
}

fn rgb(hex: &str) -> RGBColor {
    let (r, g, b) = parse_hex_color(hex).unwrap_or((0, 0, 0));
    RGBColor(r, g, b)
}

/// Y range with 10% headroom; never empty.
pub fn y_range(config: &ChartConfig) -> (f64, f64) {
    let (lo, hi) = config.value_range().unwrap_or((0.0, 1.0));
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
    let lo = if config.options.scales.y.begin_at_zero && lo >= 0.0 { 0.0 } else { lo - pad };
    (lo, hi + pad)
}

/// Label for x position `x`; blank outside the sample range.
pub fn x_label(labels: &[String], x: i32) -> String {
    usize::try_from(x)
        .ok()
        .and_then(|i| labels.get(i))
        .cloned()
        .unwrap_or_default()
}

fn legend_position(position: &str) -> SeriesLabelPosition {
    match position {
        "top" => SeriesLabelPosition::UpperMiddle,
        "left" => SeriesLabelPosition::MiddleLeft,
        "right" => SeriesLabelPosition::MiddleRight,
        _ => SeriesLabelPosition::LowerMiddle,
    }
}

/// Draw the chart onto any plotters drawing area.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    config: &ChartConfig,
) -> Result<(), Error> {
    root.fill(&WHITE)
        .map_err(|e| Error::Render(format!("Failed to fill background: {}", e)))?;

    let labels = &config.data.labels;
    let x_max = labels.len().saturating_sub(1).max(1) as i32;
    let (y_lo, y_hi) = y_range(config);

    let title = &config.options.plugins.title;
    let scales = &config.options.scales;
    let title_font = ("sans-serif", title.font.size)
        .into_font()
        .style(if title.font.weight.as_deref() == Some("bold") { FontStyle::Bold } else { FontStyle::Normal })
        .color(&rgb(&title.color));

    let mut chart = ChartBuilder::on(root)
        .caption(&title.text, title_font)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..x_max, y_lo..y_hi)
        .map_err(|e| Error::Render(format!("Failed to build chart: {}", e)))?;

    let axis_font = ("sans-serif", scales.x.title.font.size).into_font().color(&rgb(&scales.x.title.color));
    let tick_font = ("sans-serif", 12).into_font().color(&rgb(&scales.x.ticks.color));
    let x_fmt = |x: &i32| x_label(labels, *x);

    chart
        .configure_mesh()
        .x_desc(scales.x.title.text.as_str())
        .y_desc(scales.y.title.text.as_str())
        .axis_desc_style(axis_font)
        .label_style(tick_font)
        .x_labels(labels.len().clamp(2, 12))
        .x_label_formatter(&x_fmt)
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.1))
        .draw()
        .map_err(|e| Error::Render(format!("Failed to configure mesh: {}", e)))?;

    for ds in &config.data.datasets {
        let color = rgb(&ds.border_color);
        chart
            .draw_series(LineSeries::new(
                ds.data.iter().enumerate().map(|(i, v)| (i as i32, *v)),
                color.stroke_width(2),
            ))
            .map_err(|e| Error::Render(format!("Failed to draw series '{}': {}", ds.label, e)))?
            .label(ds.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    let legend = &config.options.plugins.legend;
    chart
        .configure_series_labels()
        .position(legend_position(&legend.position))
        .label_font(("sans-serif", 12).into_font().color(&rgb(&legend.labels.color)))
        .margin(10)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| Error::Render(format!("Failed to draw legend: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::style::ChartStyle;
    use crate::extract::SeriesSet;

    fn config_for(rows: &[[&str; 10]]) -> ChartConfig {
        let mut all = vec![vec![s!("hdr")]];
        all.extend(rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()));
        ChartConfig::line(&SeriesSet::from_rows(&all), &ChartStyle::default())
    }

    #[test]
    fn y_range_starts_at_zero_with_headroom() {
        let cfg = config_for(&[["t", "7", "100", "1", "1", "1", "1", "1", "1", "ok"]]);
        let (lo, hi) = y_range(&cfg);
        assert_eq!(lo, 0.0);
        assert!((hi - 110.0).abs() < 1e-9);
    }

    #[test]
    fn y_range_of_empty_chart_is_usable() {
        let cfg = config_for(&[]);
        let (lo, hi) = y_range(&cfg);
        assert!(hi > lo);
    }

    #[test]
    fn y_range_keeps_negative_values() {
        let cfg = config_for(&[["t", "-5", "10", "0", "0", "0", "0", "0", "0", "ok"]]);
        let (lo, _) = y_range(&cfg);
        assert!(lo < -5.0);
    }

    #[test]
    fn x_labels_map_positions() {
        let labels = vec![s!("a"), s!("b")];
        assert_eq!(x_label(&labels, 1), "b");
        assert_eq!(x_label(&labels, 2), "");
        assert_eq!(x_label(&labels, -1), "");
    }
}
