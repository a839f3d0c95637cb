// src/page.rs
//
// What the renderer needs from a page: the sample table and the drawing
// surface, both looked up by element id. Either may be missing; callers
// treat that as "nothing to draw", not as an error.

use std::{fs, path::Path};

use crate::core::html::has_id;
use crate::error::Error;
use crate::table::Table;

pub trait Document {
    /// Rows of the table with this id, header row first.
    fn table(&self, id: &str) -> Option<Table>;

    /// Whether a drawing surface with this id exists.
    fn has_surface(&self, id: &str) -> bool;
}

/// A rendered HTML page (e.g. a saved history page).
#[derive(Clone, Debug)]
pub struct HtmlPage {
    html: String,
}

impl HtmlPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let html = fs::read_to_string(path)?;
        logd!("Page: read {} bytes from {}", html.len(), path.display());
        Ok(Self { html })
    }

    pub fn html(&self) -> &str { &self.html }
}

impl Document for HtmlPage {
    fn table(&self, id: &str) -> Option<Table> {
        Table::from_html(&self.html, id)
    }

    fn has_surface(&self, id: &str) -> bool {
        has_id(&self.html, id)
    }
}

/// Tables and surfaces handed over directly by the host, e.g. a record file
/// plus the output the host is about to draw on.
#[derive(Clone, Debug, Default)]
pub struct TableDocument {
    tables: Vec<(String, Table)>,
    surfaces: Vec<String>,
}

impl TableDocument {
    pub fn new() -> Self { Self::default() }

    pub fn with_table(mut self, id: &str, table: Table) -> Self {
        self.tables.push((s!(id), table));
        self
    }

    pub fn with_surface(mut self, id: &str) -> Self {
        self.surfaces.push(s!(id));
        self
    }
}

impl Document for TableDocument {
    fn table(&self, id: &str) -> Option<Table> {
        self.tables.iter().find(|(tid, _)| tid == id).map(|(_, t)| t.clone())
    }

    fn has_surface(&self, id: &str) -> bool {
        self.surfaces.iter().any(|s| s == id)
    }
}
