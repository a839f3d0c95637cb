// src/chart/html.rs
//
// Standalone page: a canvas named after the surface, Chart.js from the CDN,
// and one `new Chart(...)` call with the config inlined.

use std::io::Write;

use super::{ChartBackend, ChartConfig};
use crate::config::consts::CHART_JS_CDN;
use crate::core::sanitize::escape_html;
use crate::error::Error;

pub struct HtmlPageBackend<W: Write> {
    out: W,
}

impl<W: Write> HtmlPageBackend<W> {
    pub fn new(out: W) -> Self { Self { out } }
    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ChartBackend for HtmlPageBackend<W> {
    fn construct(&mut self, surface: &str, config: &ChartConfig) -> Result<(), Error> {
        let page = page_html(surface, config)?;
        self.out.write_all(page.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Render the whole page as a string.
pub fn page_html(surface: &str, config: &ChartConfig) -> Result<String, Error> {
    // "</" inside an inline script would close it early.
    let json = serde_json::to_string_pretty(config)?.replace("</", "<\\/");
    let title = escape_html(&config.options.plugins.title.text);
    let surface_attr = escape_html(surface);
    let surface_js = serde_json::to_string(surface)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <script src="{CHART_JS_CDN}"></script>
</head>
<body>
  <canvas id="{surface_attr}"></canvas>
  <script>
    const config = {json};
    new Chart(document.getElementById({surface_js}).getContext("2d"), config);
  </script>
</body>
</html>
"#
    ))
}
