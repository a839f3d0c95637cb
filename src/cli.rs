// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::config::consts::{SURFACE_ID, TABLE_ID};
use crate::config::options::{parse_size, ExportOptions, OutputFormat, RenderOptions, SourceOrder};
use crate::error::Error;
use crate::params::Params;

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Chart water-quality sample tables")]
pub struct Cli {
    /// Rendered history page (.html) or sample record file (.csv / .tsv)
    pub input: PathBuf,

    /// Output format: json, html, png, csv or tsv
    #[arg(short, long, default_value = "json", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Output file or directory ("-" for stdout; text formats only)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Id of the sample table on the page
    #[arg(long, default_value = TABLE_ID)]
    pub table_id: String,

    /// Id of the drawing surface on the page
    #[arg(long, default_value = SURFACE_ID)]
    pub surface_id: String,

    /// Source row order: newest-first or oldest-first (default depends on input)
    #[arg(long, value_parser = parse_order)]
    pub order: Option<SourceOrder>,

    /// Chart only the N most recent samples
    #[arg(long)]
    pub last: Option<usize>,

    /// Style file (key=value) overriding colours, labels and line settings
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Write the effective style to this file
    #[arg(long)]
    pub write_style: Option<PathBuf>,

    /// Image size for PNG output (WIDTHxHEIGHT)
    #[arg(long, default_value = "1200x800", value_parser = parse_size_arg)]
    pub size: (u32, u32),

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s).map_err(|e| e.to_string())
}

fn parse_order(s: &str) -> Result<SourceOrder, String> {
    SourceOrder::parse(s).ok_or_else(|| format!("expected newest-first or oldest-first, got '{s}'"))
}

fn parse_size_arg(s: &str) -> Result<(u32, u32), String> {
    parse_size(s).map_err(|e| e.to_string())
}

impl Cli {
    pub fn into_params(self) -> Params {
        let mut params = Params::new(self.input);
        params.order = self.order;
        params.render = RenderOptions {
            table_id: self.table_id,
            surface_id: self.surface_id,
            limit: self.last,
            ..RenderOptions::default()
        };
        params.export = ExportOptions {
            format: self.format,
            out: self.out,
            size: self.size,
        };
        params.style = self.style;
        params.write_style = self.write_style;
        params
    }
}

pub fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    crate::log::init(level, cli.log_file.as_deref())?;

    let params = cli.into_params();
    let summary = crate::runner::run(&params)?;

    match (&summary.chart, &summary.written) {
        (Some(chart), Some(path)) => {
            eprintln!("Wrote {} ({} samples)", path.display(), chart.samples);
        }
        (Some(_), None) => {}
        (None, _) => {
            eprintln!(
                "No table '{}' or drawing surface '{}' in {}; nothing written",
                params.render.table_id,
                params.render.surface_id,
                params.input.display()
            );
        }
    }
    Ok(())
}
