// src/gui/components/trend_plot.rs
//
// The in-window drawing surface. `PlotBackend` receives the chart config
// once per load; `draw` paints it every frame with the egui painter:
// title, y grid with ticks, x labels, one curve per dataset, legend, and a
// readout of the sample under the pointer.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use eframe::egui::epaint::CubicBezierShape;

use crate::chart::bitmap::y_range;
use crate::chart::{ChartBackend, ChartConfig};
use crate::config::style::parse_hex_color;
use crate::error::Error;

#[derive(Debug, Default)]
pub struct PlotBackend {
    config: Option<ChartConfig>,
}

impl PlotBackend {
    pub fn config(&self) -> Option<&ChartConfig> { self.config.as_ref() }
    pub fn clear(&mut self) { self.config = None; }
}

impl ChartBackend for PlotBackend {
    fn construct(&mut self, surface: &str, config: &ChartConfig) -> Result<(), Error> {
        logd!("Plot: chart for '{}' ({} labels)", surface, config.data.labels.len());
        self.config = Some(config.clone());
        Ok(())
    }
}

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 40.0;
const MARGIN_BOTTOM: f32 = 90.0;
const Y_TICKS: usize = 5;

fn color(hex: &str) -> Color32 {
    let (r, g, b) = parse_hex_color(hex).unwrap_or((0, 0, 0));
    Color32::from_rgb(r, g, b)
}

/// Screen x of sample `i` out of `n` inside `[left, right]`.
pub fn x_pos(i: usize, n: usize, left: f32, right: f32) -> f32 {
    if n <= 1 {
        return (left + right) / 2.0;
    }
    left + (right - left) * i as f32 / (n - 1) as f32
}

/// Index of the sample nearest to screen x.
pub fn nearest_index(x: f32, n: usize, left: f32, right: f32) -> Option<usize> {
    if n == 0 {
        return None;
    }
    if n == 1 || right <= left {
        return Some(0);
    }
    let t = ((x - left) / (right - left)).clamp(0.0, 1.0);
    Some((t * (n - 1) as f32).round() as usize)
}

/// Bezier control points for a cardinal spline through `pts`, one `(out_of_i, into_i_plus_1)` pair per segment. Tension 0 gives
/// straight segments.
pub fn spline_controls(pts: &[Pos2], tension: f32) -> Vec<(Pos2, Pos2)> {
    let n = pts.len();
    if n < 2 {
        return Vec::new();
    }
    // (before, after) control point around each vertex
    let around: Vec<(Pos2, Pos2)> = (0..n)
        .map(|i| {
            let prev = pts[i.saturating_sub(1)];
            let cur = pts[i];
            let next = pts[(i + 1).min(n - 1)];
            let d01 = prev.distance(cur);
            let d12 = cur.distance(next);
            let sum = d01 + d12;
            if sum <= f32::EPSILON {
                return (cur, cur);
            }
            let fa = tension * d01 / sum;
            let fb = tension * d12 / sum;
            let dir = next - prev;
            (cur - dir * fa, cur + dir * fb)
        })
        .collect();
    (0..n - 1).map(|i| (around[i].1, around[i + 1].0)).collect()
}

pub fn draw(ui: &mut egui::Ui, plot: &PlotBackend) {
    let Some(config) = plot.config() else {
        ui.centered_and_justified(|ui| {
            ui.weak("Load a history page or record file to see the trends");
        });
        return;
    };

    let size = ui.available_size().max(Vec2::new(320.0, 240.0));
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let full = response.rect;
    painter.rect_filled(full, 0.0, Color32::WHITE);

    let area = Rect::from_min_max(
        Pos2::new(full.left() + MARGIN_LEFT, full.top() + MARGIN_TOP),
        Pos2::new(full.right() - MARGIN_RIGHT, full.bottom() - MARGIN_BOTTOM),
    );
    if area.width() <= 0.0 || area.height() <= 0.0 {
        return;
    }

    let opts = &config.options;
    let title = &opts.plugins.title;
    painter.text(
        Pos2::new(full.center().x, full.top() + 8.0),
        Align2::CENTER_TOP,
        &title.text,
        FontId::proportional(title.font.size as f32),
        color(&title.color),
    );

    let (lo, hi) = y_range(config);
    let span = (hi - lo).max(f64::EPSILON);
    let y_of = |v: f64| area.bottom() - ((v - lo) / span) as f32 * area.height();

    // y grid + ticks
    let grid = Stroke::new(1.0, Color32::from_black_alpha(13));
    let tick_color = color(&opts.scales.y.ticks.color);
    for k in 0..=Y_TICKS {
        let v = lo + span * k as f64 / Y_TICKS as f64;
        let y = y_of(v);
        painter.line_segment([Pos2::new(area.left(), y), Pos2::new(area.right(), y)], grid);
        painter.text(
            Pos2::new(area.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{v:.1}"),
            FontId::proportional(11.0),
            tick_color,
        );
    }
    painter.line_segment([area.left_bottom(), area.right_bottom()], Stroke::new(1.0, Color32::GRAY));
    painter.line_segment([area.left_top(), area.left_bottom()], Stroke::new(1.0, Color32::GRAY));

    // x labels, thinned to fit
    let labels = &config.data.labels;
    let n = labels.len();
    let step = (n / 10).max(1);
    for (i, label) in labels.iter().enumerate().step_by(step) {
        let x = x_pos(i, n, area.left(), area.right());
        painter.text(
            Pos2::new(x, area.bottom() + 4.0),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(11.0),
            color(&opts.scales.x.ticks.color),
        );
    }

    // axis titles
    let axis_title = &opts.scales.x.title;
    painter.text(
        Pos2::new(area.center().x, area.bottom() + 22.0),
        Align2::CENTER_TOP,
        &axis_title.text,
        FontId::proportional(axis_title.font.size as f32),
        color(&axis_title.color),
    );
    let y_title = &opts.scales.y.title;
    painter.text(
        Pos2::new(full.left() + 4.0, full.top() + MARGIN_TOP - 16.0),
        Align2::LEFT_TOP,
        &y_title.text,
        FontId::proportional(11.0),
        color(&y_title.color),
    );

    // curves
    for ds in &config.data.datasets {
        let stroke = Stroke::new(2.0, color(&ds.border_color));
        let pts: Vec<Pos2> = ds
            .data
            .iter()
            .enumerate()
            .map(|(i, v)| Pos2::new(x_pos(i, n, area.left(), area.right()), y_of(*v)))
            .collect();
        if pts.len() == 1 {
            painter.circle_filled(pts[0], 3.0, stroke.color);
            continue;
        }
        let tension = ds.tension as f32;
        if tension <= 0.0 {
            painter.add(egui::Shape::line(pts, stroke));
            continue;
        }
        for (seg, (c1, c2)) in spline_controls(&pts, tension).into_iter().enumerate() {
            painter.add(CubicBezierShape::from_points_stroke(
                [pts[seg], c1, c2, pts[seg + 1]],
                false,
                Color32::TRANSPARENT,
                stroke,
            ));
        }
    }

    // legend row along the bottom
    let legend = &opts.plugins.legend;
    let box_w = legend.labels.box_width as f32;
    let mut x = full.left() + MARGIN_LEFT;
    let y = full.bottom() - 22.0;
    for ds in &config.data.datasets {
        let swatch = Rect::from_min_size(Pos2::new(x, y - 5.0), Vec2::new(box_w, 10.0));
        painter.rect_filled(swatch, 0.0, color(&ds.border_color));
        let text = painter.text(
            Pos2::new(swatch.right() + 4.0, y),
            Align2::LEFT_CENTER,
            &ds.label,
            FontId::proportional(12.0),
            color(&legend.labels.color),
        );
        x = text.right() + 14.0;
    }

    // hover readout
    if let Some(pos) = response.hover_pos().filter(|p| area.contains(*p)) {
        if let Some(i) = nearest_index(pos.x, n, area.left(), area.right()) {
            let x = x_pos(i, n, area.left(), area.right());
            painter.line_segment(
                [Pos2::new(x, area.top()), Pos2::new(x, area.bottom())],
                Stroke::new(1.0, Color32::from_black_alpha(60)),
            );
            let mut lines = vec![labels[i].clone()];
            lines.extend(config.data.datasets.iter().map(|ds| {
                let v = ds.data.get(i).copied().unwrap_or_default();
                format!("{}: {}", ds.label, v)
            }));
            let (anchor, align) = if x > area.center().x {
                (Pos2::new(x - 8.0, area.top() + 4.0), Align2::RIGHT_TOP)
            } else {
                (Pos2::new(x + 8.0, area.top() + 4.0), Align2::LEFT_TOP)
            };
            let galley = painter.layout_no_wrap(lines.join("\n"), FontId::monospace(11.0), Color32::BLACK);
            let rect = align.anchor_size(anchor, galley.size());
            painter.rect_filled(rect.expand(4.0), 2.0, Color32::from_white_alpha(220));
            painter.galley(rect.min, galley, Color32::BLACK);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_positions_span_the_area() {
        assert_eq!(x_pos(0, 3, 0.0, 100.0), 0.0);
        assert_eq!(x_pos(2, 3, 0.0, 100.0), 100.0);
        assert_eq!(x_pos(0, 1, 0.0, 100.0), 50.0);
    }

    #[test]
    fn nearest_index_rounds_and_clamps() {
        assert_eq!(nearest_index(49.0, 3, 0.0, 100.0), Some(1));
        assert_eq!(nearest_index(-20.0, 3, 0.0, 100.0), Some(0));
        assert_eq!(nearest_index(500.0, 3, 0.0, 100.0), Some(2));
        assert_eq!(nearest_index(10.0, 0, 0.0, 100.0), None);
    }

    #[test]
    fn zero_tension_controls_sit_on_the_points() {
        let pts = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 5.0), Pos2::new(20.0, 0.0)];
        let c = spline_controls(&pts, 0.0);
        assert_eq!(c.len(), 2);
        assert_eq!(c[0], (pts[0], pts[1]));
        assert_eq!(c[1], (pts[1], pts[2]));
    }

    #[test]
    fn controls_around_a_peak_are_level() {
        let pts = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 5.0), Pos2::new(20.0, 0.0)];
        let c = spline_controls(&pts, 0.3);
        // symmetric neighbours: the tangent at the peak is horizontal
        assert_eq!(c[0].1.y, 5.0);
        assert_eq!(c[1].0.y, 5.0);
        assert!(c[0].1.x < 10.0 && c[1].0.x > 10.0);
    }

    #[test]
    fn backend_keeps_last_config() {
        use crate::config::style::ChartStyle;
        use crate::extract::SeriesSet;

        let mut plot = PlotBackend::default();
        let cfg = ChartConfig::line(&SeriesSet::default(), &ChartStyle::default());
        plot.construct("trendChart", &cfg).unwrap();
        assert_eq!(plot.config(), Some(&cfg));
        plot.clear();
        assert!(plot.config().is_none());
    }
}
