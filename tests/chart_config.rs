// tests/chart_config.rs
use serde_json::Value;

use water_trends::chart::ChartConfig;
use water_trends::config::style::ChartStyle;
use water_trends::extract::{Measurement, SeriesSet};

fn rows() -> Vec<Vec<String>> {
    let r = |c: &[&str]| c.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        r(&["when", "pH", "TDS", "Ca", "Mg", "K", "Na", "SO4", "Cl", "Verdict"]),
        r(&["2024-01-02", "7.3", "130", "42", "11", "5", "16", "31", "21", "Good"]),
        r(&["2024-01-01", "7.1", "120", "40", "10", "5", "15", "30", "20", "Good"]),
    ]
}

fn config_json() -> Value {
    let cfg = ChartConfig::line(&SeriesSet::from_rows(&rows()), &ChartStyle::default());
    serde_json::from_str(&cfg.to_json_pretty().unwrap()).unwrap()
}

#[test]
fn top_level_shape() {
    let v = config_json();
    assert_eq!(v["type"], "line");
    assert_eq!(v["data"]["labels"], serde_json::json!(["2024-01-01", "2024-01-02"]));
    assert_eq!(v["options"]["responsive"], true);
}

#[test]
fn eight_datasets_with_default_style() {
    let v = config_json();
    let ds = v["data"]["datasets"].as_array().unwrap();
    assert_eq!(ds.len(), 8);

    assert_eq!(ds[0]["label"], "pH");
    assert_eq!(ds[0]["borderColor"], "#0077b6");
    assert_eq!(ds[0]["data"], serde_json::json!([7.1, 7.3]));
    assert_eq!(ds[1]["label"], "TDS (ppm)");
    assert_eq!(ds[1]["borderColor"], "#ef476f");
    assert_eq!(ds[7]["label"], "Chloride (mg/L)");
    assert_eq!(ds[7]["borderColor"], "#073b4c");

    for d in ds {
        assert_eq!(d["fill"], false);
        assert_eq!(d["tension"], 0.3);
    }
}

#[test]
fn plugins_and_scales() {
    let v = config_json();
    let plugins = &v["options"]["plugins"];
    assert_eq!(plugins["title"]["display"], true);
    assert_eq!(plugins["title"]["text"], "Water Composition Trends Over Time");
    assert_eq!(plugins["title"]["color"], "#023e8a");
    assert_eq!(plugins["title"]["font"]["size"], 18);
    assert_eq!(plugins["title"]["font"]["weight"], "bold");
    assert_eq!(plugins["legend"]["position"], "bottom");
    assert_eq!(plugins["legend"]["labels"]["boxWidth"], 20);
    assert_eq!(plugins["legend"]["labels"]["color"], "#333");

    let scales = &v["options"]["scales"];
    assert_eq!(scales["x"]["title"]["text"], "Sample Date & Time");
    assert_eq!(scales["x"]["title"]["font"]["size"], 14);
    assert_eq!(scales["x"]["ticks"]["color"], "#444");
    assert!(scales["x"].get("beginAtZero").is_none());
    assert_eq!(scales["y"]["beginAtZero"], true);
    assert_eq!(scales["y"]["title"]["text"], "Concentration (mg/L or ppm)");
    assert_eq!(scales["y"]["title"]["color"], "#023e8a");
    assert_eq!(scales["y"]["grid"]["color"], "rgba(0,0,0,0.05)");
}

#[test]
fn style_overrides_flow_into_datasets() {
    let mut style = ChartStyle::default();
    style.series_mut(Measurement::Sodium).label = "Na+".into();
    style.series_mut(Measurement::Sodium).color = "#123456".into();
    style.tension = 0.0;
    style.fill = true;

    let cfg = ChartConfig::line(&SeriesSet::from_rows(&rows()), &style);
    let na = &cfg.data.datasets[Measurement::Sodium.index()];
    assert_eq!(na.label, "Na+");
    assert_eq!(na.border_color, "#123456");
    assert!(cfg.data.datasets.iter().all(|d| d.fill && d.tension == 0.0));
}

#[test]
fn json_reads_back_into_the_same_config() {
    let cfg = ChartConfig::line(&SeriesSet::from_rows(&rows()), &ChartStyle::default());
    let back: ChartConfig = serde_json::from_str(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn value_range_includes_zero_for_y_axis() {
    let cfg = ChartConfig::line(&SeriesSet::from_rows(&rows()), &ChartStyle::default());
    assert_eq!(cfg.value_range(), Some((0.0, 130.0)));
    let empty = ChartConfig::line(&SeriesSet::default(), &ChartStyle::default());
    assert_eq!(empty.value_range(), None);
    assert_eq!(empty.data.datasets.len(), 8);
}
