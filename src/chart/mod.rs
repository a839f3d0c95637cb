// src/chart/mod.rs
//
// Line-chart configuration in the shape Chart.js expects:
//
//   { type: "line",
//     data: { labels: [...], datasets: [{ label, data, borderColor, fill, tension }] },
//     options: { responsive, plugins: { title, legend }, scales: { x, y } } }
//
// Backends receive the finished config once and own it from then on.

use serde::{Deserialize, Serialize};

use crate::config::consts::*;
use crate::config::style::ChartStyle;
use crate::error::Error;
use crate::extract::SeriesSet;

pub mod bitmap;
pub mod delimited;
pub mod html;
pub mod json;

pub use bitmap::PngBackend;
pub use delimited::DelimitedBackend;
pub use html::HtmlPageBackend;
pub use json::JsonBackend;

/// The charting side: takes a surface id and one config.
pub trait ChartBackend {
    fn construct(&mut self, surface: &str, config: &ChartConfig) -> Result<(), Error>;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")] // 'type' is a keyword
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub title: Title,
    pub legend: Legend,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
    pub color: String,
    pub font: Font,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub position: String,
    pub labels: LegendLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub box_width: u32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(default, skip_serializing_if = "is_false")]
    pub begin_at_zero: bool,
    pub title: Title,
    pub ticks: Ticks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticks {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub color: String,
}

fn is_false(b: &bool) -> bool { !*b }

fn axis_title(text: &str) -> Title {
    Title {
        display: true,
        text: s!(text),
        color: s!(TITLE_COLOR),
        font: Font { size: AXIS_FONT_SIZE, weight: None },
    }
}

impl ChartConfig {
    /// The trend chart: one line dataset per measurement over the sample labels.
    pub fn line(set: &SeriesSet, style: &ChartStyle) -> Self {
        let datasets = set
            .iter()
            .map(|(m, values)| {
                let st = style.series(m);
                Dataset {
                    label: st.label.clone(),
                    data: values.to_vec(),
                    border_color: st.color.clone(),
                    fill: style.fill,
                    tension: style.tension,
                }
            })
            .collect();

        Self {
            chart_type: s!(CHART_TYPE),
            data: ChartData { labels: set.labels().to_vec(), datasets },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    title: Title {
                        display: true,
                        text: s!(TITLE_TEXT),
                        color: s!(TITLE_COLOR),
                        font: Font { size: TITLE_FONT_SIZE, weight: Some(s!("bold")) },
                    },
                    legend: Legend {
                        position: s!(LEGEND_POSITION),
                        labels: LegendLabels { box_width: LEGEND_BOX_WIDTH, color: s!(LEGEND_COLOR) },
                    },
                },
                scales: Scales {
                    x: Axis {
                        begin_at_zero: false,
                        title: axis_title(X_AXIS_TITLE),
                        ticks: Ticks { color: s!(TICK_COLOR) },
                        grid: None,
                    },
                    y: Axis {
                        begin_at_zero: true,
                        title: axis_title(Y_AXIS_TITLE),
                        ticks: Ticks { color: s!(TICK_COLOR) },
                        grid: Some(Grid { color: s!(GRID_COLOR) }),
                    },
                },
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `(min, max)` over all datasets, widened to include 0 when the y axis
    /// begins at zero. `None` when there is no data.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut it = self.data.datasets.iter().flat_map(|d| d.data.iter().copied());
        let first = it.next()?;
        let (mut lo, mut hi) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if self.options.scales.y.begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        Some((lo, hi))
    }
}
