// src/chart/json.rs
use std::io::Write;

use super::{ChartBackend, ChartConfig};
use crate::error::Error;

/// Writes the config as pretty-printed Chart.js JSON.
pub struct JsonBackend<W: Write> {
    out: W,
}

impl<W: Write> JsonBackend<W> {
    pub fn new(out: W) -> Self { Self { out } }
    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ChartBackend for JsonBackend<W> {
    fn construct(&mut self, _surface: &str, config: &ChartConfig) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut self.out, config)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
