// src/chart/delimited.rs
//
// CSV/TSV view of a chart: the x-axis title and dataset labels as header,
// then one line per label in chart order (oldest first).

use std::io::Write;

use super::{ChartBackend, ChartConfig};
use crate::csv::write_row;
use crate::error::Error;

pub struct DelimitedBackend<W: Write> {
    out: W,
    sep: char,
}

impl<W: Write> DelimitedBackend<W> {
    pub fn new(out: W, sep: char) -> Self { Self { out, sep } }
    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ChartBackend for DelimitedBackend<W> {
    fn construct(&mut self, _surface: &str, config: &ChartConfig) -> Result<(), Error> {
        let datasets = &config.data.datasets;

        let mut header = Vec::with_capacity(datasets.len() + 1);
        header.push(config.options.scales.x.title.text.clone());
        header.extend(datasets.iter().map(|d| d.label.clone()));
        write_row(&mut self.out, &header, self.sep)?;

        for (i, label) in config.data.labels.iter().enumerate() {
            let mut row = Vec::with_capacity(datasets.len() + 1);
            row.push(label.clone());
            row.extend(datasets.iter().map(|d| d.data.get(i).map(|v| v.to_string()).unwrap_or_default()));
            write_row(&mut self.out, &row, self.sep)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
