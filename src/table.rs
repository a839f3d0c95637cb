// src/table.rs
//
// The extractor's input: rows of cell strings in document order, header row
// first. Built from a rendered HTML table or a sample record file, so the
// extraction logic never sees markup.

use std::{fs, path::Path};

use crate::core::html::{
    element_by_id_ci, inner_after_open_tag, mask_inert, next_tag_block_lc, text_content, to_lowercase_fast,
};
use crate::csv::parse_rows;
use crate::error::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self { Self { rows } }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(|r| r.as_slice())
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize { self.data_rows().len() }

    /// Widest row (header included).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// Rows of the `<table id="{id}">` element. `None` when it is absent.
    /// Commented-out markup is ignored.
    pub fn from_html(doc: &str, id: &str) -> Option<Self> {
        let doc = mask_inert(doc);
        let inner = element_by_id_ci(&doc, "table", id)?;
        Some(Self::from_table_html(inner))
    }

    /// Parse the inside of a `<table>`: each `<tr>` becomes a row of its
    /// `<td>` texts. The first row falls back to its `<th>` texts (the
    /// header); later rows made only of `<th>` cells come out empty.
    pub fn from_table_html(inner: &str) -> Self {
        let lc = to_lowercase_fast(inner);
        let mut rows = Vec::new();
        let mut pos = 0usize;

        while let Some((tr_s, tr_e)) = next_tag_block_lc(inner, &lc, "tr", pos) {
            pos = tr_e;
            let tr = &inner[tr_s..tr_e];
            let tr_lc = &lc[tr_s..tr_e];

            let mut cells = row_cells(tr, tr_lc, "td");
            if cells.is_empty() && rows.is_empty() {
                cells = row_cells(tr, tr_lc, "th");
            }
            rows.push(cells);
        }
        logd!("Table: parsed {} <tr> rows", rows.len());
        Self { rows }
    }

    /// Record file: first line is the header.
    pub fn from_csv(text: &str, sep: char) -> Self {
        Self { rows: parse_rows(text, sep) }
    }

    pub fn load_csv(path: &Path, sep: char) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_csv(&text, sep))
    }
}

fn row_cells(tr: &str, tr_lc: &str, tag: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_lc(tr, tr_lc, tag, pos) {
        cells.push(text_content(inner_after_open_tag(&tr[s..e])));
        pos = e;
    }
    cells
}
