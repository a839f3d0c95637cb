// src/runner.rs
//
// One CLI run: load the style and the input document, render the trend
// chart once into the requested format, and write it out.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::{
    chart::{ChartBackend, DelimitedBackend, HtmlPageBackend, JsonBackend, PngBackend},
    config::{options::OutputFormat, style::ChartStyle},
    error::Error,
    file::resolve_out_path,
    page::{Document, HtmlPage, TableDocument},
    params::Params,
    render::{render_trends, ChartSummary},
    table::Table,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    /// `None` when nothing was drawn or the output went to stdout.
    pub written: Option<PathBuf>,
    /// `None` when the table or drawing surface was missing.
    pub chart: Option<ChartSummary>,
}

pub fn run(params: &Params) -> Result<RunSummary, Error> {
    let style = match &params.style {
        Some(path) => ChartStyle::load(path)?,
        None => ChartStyle::default(),
    };
    if let Some(path) = &params.write_style {
        style.save(path)?;
        logf!("Style: wrote {}", path.display());
    }

    let opts = params.effective_render();
    let doc = load_document(params)?;
    let export = &params.export;

    if !export.format.is_text() {
        if export.is_stdout() {
            return Err(Error::Output(s!("PNG output needs a file path")));
        }
        let path = resolve_out_path(export.out.as_deref(), &export.default_file_name())?;
        let is_png = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("png"));
        if !is_png {
            logw!("Run: {} has no .png extension, writing PNG anyway", path.display());
        }
        let mut backend = PngBackend::new(&path, export.size);
        let chart = render_trends(doc.as_ref(), &opts, &style, &mut backend)?;
        let written = chart.as_ref().map(|_| path);
        return Ok(RunSummary { written, chart });
    }

    // Text formats render into memory first so a skipped chart leaves no file behind.
    let mut buf: Vec<u8> = Vec::new();
    let chart = {
        let mut backend = text_backend(export.format, &mut buf)?;
        render_trends(doc.as_ref(), &opts, &style, backend.as_mut())?
    };
    if chart.is_none() {
        logf!("Run: nothing to chart in {}", params.input.display());
        return Ok(RunSummary { written: None, chart });
    }

    if export.is_stdout() {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(&buf)?;
        lock.flush()?;
        return Ok(RunSummary { written: None, chart });
    }

    let path = resolve_out_path(export.out.as_deref(), &export.default_file_name())?;
    std::fs::write(&path, &buf)?;
    logf!("Run: wrote {} ({} bytes)", path.display(), buf.len());
    Ok(RunSummary { written: Some(path), chart })
}

fn text_backend<'a>(format: OutputFormat, buf: &'a mut Vec<u8>) -> Result<Box<dyn ChartBackend + 'a>, Error> {
    let backend: Box<dyn ChartBackend + 'a> = match format {
        OutputFormat::Json => Box::new(JsonBackend::new(buf)),
        OutputFormat::Html => Box::new(HtmlPageBackend::new(buf)),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = format.delim().unwrap_or(',');
            Box::new(DelimitedBackend::new(buf, sep))
        }
        OutputFormat::Png => return Err(Error::Output(s!("PNG is not a text format"))),
    };
    Ok(backend)
}

/// Pages are searched as-is. Record files have no page around them, so the
/// table is registered under the configured id and the output stands in for
/// the drawing surface.
fn load_document(params: &Params) -> Result<Box<dyn Document>, Error> {
    let opts = &params.render;
    match params.input_kind.delim() {
        None => Ok(Box::new(HtmlPage::load(&params.input)?)),
        Some(sep) => {
            let table = Table::load_csv(&params.input, sep)?;
            logd!("Run: {} record rows from {:?}", table.row_count(), params.input_kind);
            Ok(Box::new(
                TableDocument::new()
                    .with_table(&opts.table_id, table)
                    .with_surface(&opts.surface_id),
            ))
        }
    }
}
