// src/render.rs
//
// One-shot entry point: find the table and the drawing surface, extract the
// series, build the chart config and hand it to the backend exactly once.
// A missing table or surface is a silent no-op (Ok(None)).

use crate::chart::{ChartBackend, ChartConfig};
use crate::config::options::RenderOptions;
use crate::config::style::ChartStyle;
use crate::error::Error;
use crate::extract::{extract_series, ExtractStats};
use crate::page::Document;

/// What was handed to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartSummary {
    pub surface: String,
    pub samples: usize,
    pub stats: ExtractStats,
}

pub fn render_trends(
    doc: &dyn Document,
    opts: &RenderOptions,
    style: &ChartStyle,
    backend: &mut dyn ChartBackend,
) -> Result<Option<ChartSummary>, Error> {
    let Some(table) = doc.table(&opts.table_id) else {
        logd!("Render: no table '{}', skipping", opts.table_id);
        return Ok(None);
    };
    if !doc.has_surface(&opts.surface_id) {
        logd!("Render: no drawing surface '{}', skipping", opts.surface_id);
        return Ok(None);
    }

    let ex = extract_series(&table.rows, opts.order, opts.limit);
    let config = ChartConfig::line(&ex.set, style);
    backend.construct(&opts.surface_id, &config)?;

    logf!("Render: chart on '{}' with {} samples", opts.surface_id, ex.set.len());
    Ok(Some(ChartSummary {
        surface: opts.surface_id.clone(),
        samples: ex.set.len(),
        stats: ex.stats,
    }))
}
