// src/config/style.rs
//
// Display style per measurement, plus the line settings shared by all
// datasets. Stored as a small key=value text file:
//
//   # comments and blank lines are ignored
//   tension=0.3
//   fill=false
//   color.pH=#0077b6
//   label.TDS=TDS (ppm)

use std::{fs, path::Path};

use super::consts::TENSION;
use crate::error::Error;
use crate::extract::Measurement;

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    pub label: String,
    /// `#rgb` or `#rrggbb`
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    series: [SeriesStyle; 8],
    pub tension: f64,
    pub fill: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let st = |label: &str, color: &str| SeriesStyle { label: s!(label), color: s!(color) };
        Self {
            series: [
                st("pH", "#0077b6"),
                st("TDS (ppm)", "#ef476f"),
                st("Calcium (mg/L)", "#06d6a0"),
                st("Magnesium (mg/L)", "#ffd166"),
                st("Potassium (mg/L)", "#8338ec"),
                st("Sodium (mg/L)", "#118ab2"),
                st("Sulphate (mg/L)", "#ff6700"),
                st("Chloride (mg/L)", "#073b4c"),
            ],
            tension: TENSION,
            fill: false,
        }
    }
}

impl ChartStyle {
    pub fn series(&self, m: Measurement) -> &SeriesStyle {
        &self.series[m.index()]
    }

    pub fn series_mut(&mut self, m: Measurement) -> &mut SeriesStyle {
        &mut self.series[m.index()]
    }

    /// Apply a style file on top of the defaults.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut style = Self::default();
        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') { continue; }

            let err = |msg: String| Error::Style { line: line_no, msg };
            let (key, val) = line
                .split_once('=')
                .map(|(k, v)| (k.trim(), v.trim()))
                .ok_or_else(|| err(format!("expected key=value, got '{line}'")))?;

            match key {
                "tension" => {
                    let t: f64 = val.parse().map_err(|_| err(format!("bad tension '{val}'")))?;
                    if !(0.0..=1.0).contains(&t) {
                        return Err(err(format!("tension out of range 0..1: {t}")));
                    }
                    style.tension = t;
                }
                "fill" => style.fill = parse_bool(val).ok_or_else(|| err(format!("bad bool '{val}'")))?,
                _ => {
                    let (kind, name) = key
                        .split_once('.')
                        .ok_or_else(|| err(format!("unknown key '{key}'")))?;
                    let m = Measurement::from_key(name)
                        .ok_or_else(|| err(format!("unknown measurement '{name}'")))?;
                    match kind {
                        "color" => {
                            if parse_hex_color(val).is_none() {
                                return Err(err(format!("bad colour '{val}'")));
                            }
                            style.series_mut(m).color = s!(val);
                        }
                        "label" => {
                            if val.is_empty() {
                                return Err(err(format!("empty label for {m}")));
                            }
                            style.series_mut(m).label = s!(val);
                        }
                        _ => return Err(err(format!("unknown key '{key}'"))),
                    }
                }
            }
        }
        Ok(style)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        let style = Self::parse(&text)?;
        logd!("Style: loaded {}", path.display());
        Ok(style)
    }

    pub fn to_text(&self) -> String {
        let mut s = s!();
        s.push_str(&format!("tension={}\n", self.tension));
        s.push_str(&format!("fill={}\n", self.fill));
        for m in Measurement::ALL {
            let st = self.series(m);
            s.push_str(&format!("color.{}={}\n", m.key(), st.color));
            s.push_str(&format!("label.{}={}\n", m.key(), st.label));
        }
        s
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_text())?;
        Ok(())
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// `#rgb` / `#rrggbb` → (r, g, b)
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    match hex.len() {
        3 => Some((digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#0077b6"), Some((0x00, 0x77, 0xb6)));
        assert_eq!(parse_hex_color("#333"), Some((0x33, 0x33, 0x33)));
        assert_eq!(parse_hex_color("0077b6"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#ggg"), None);
    }

    #[test]
    fn defaults_are_valid_hex() {
        let st = ChartStyle::default();
        for m in Measurement::ALL {
            assert!(parse_hex_color(&st.series(m).color).is_some(), "{m}");
        }
        assert_eq!(st.tension, 0.3);
        assert!(!st.fill);
    }

    #[test]
    fn parse_overrides_and_reports_line() {
        let st = ChartStyle::parse("# mine\n\ncolor.ph=#000\nlabel.TDS=Solids\ntension=0.5\n").unwrap();
        assert_eq!(st.series(Measurement::Ph).color, "#000");
        assert_eq!(st.series(Measurement::Tds).label, "Solids");
        assert_eq!(st.series(Measurement::Calcium).label, "Calcium (mg/L)");
        assert_eq!(st.tension, 0.5);

        match ChartStyle::parse("fill=true\ncolor.Nitrate=#fff\n") {
            Err(Error::Style { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected style error, got {other:?}"),
        }
        assert!(ChartStyle::parse("tension=2").is_err());
        assert!(ChartStyle::parse("color.pH=red").is_err());
        assert!(ChartStyle::parse("just text").is_err());
    }

    #[test]
    fn text_form_reloads_to_same_style() {
        let mut st = ChartStyle::default();
        st.series_mut(Measurement::Sodium).color = s!("#abcdef");
        st.fill = true;
        assert_eq!(ChartStyle::parse(&st.to_text()).unwrap(), st);
    }
}
