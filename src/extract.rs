// src/extract.rs
//
// Series extraction: table rows → eight aligned numeric series plus labels.
//
// Column layout of a data row (header row excluded):
//   0 label (sample date/time), 1 pH, 2 TDS, 3 Calcium, 4 Magnesium,
//   5 Potassium, 6 Sodium, 7 Sulphate, 8 Chloride, 9+ unused (verdict).
//
// Rows with fewer than MIN_CELLS cells are skipped. Cells that do not parse
// as numbers become 0. Output is always oldest-first.

use std::fmt;

use crate::config::consts::{LABEL_COL, MIN_CELLS};
use crate::config::options::SourceOrder;

/// One charted measurement, in table column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measurement {
    Ph,
    Tds,
    Calcium,
    Magnesium,
    Potassium,
    Sodium,
    Sulphate,
    Chloride,
}

impl Measurement {
    pub const ALL: [Measurement; 8] = [
        Measurement::Ph,
        Measurement::Tds,
        Measurement::Calcium,
        Measurement::Magnesium,
        Measurement::Potassium,
        Measurement::Sodium,
        Measurement::Sulphate,
        Measurement::Chloride,
    ];

    /// Table column holding this measurement.
    pub fn column(self) -> usize {
        self.index() + 1
    }

    /// Position in `ALL` (and in every `SeriesSet`).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short name used in style files and export headers.
    pub fn key(self) -> &'static str {
        match self {
            Measurement::Ph => "pH",
            Measurement::Tds => "TDS",
            Measurement::Calcium => "Calcium",
            Measurement::Magnesium => "Magnesium",
            Measurement::Potassium => "Potassium",
            Measurement::Sodium => "Sodium",
            Measurement::Sulphate => "Sulphate",
            Measurement::Chloride => "Chloride",
        }
    }

    /// Case-insensitive lookup by `key()`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|m| m.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parse cell text as a number; anything unusable becomes 0.
///
/// Leading whitespace is ignored and the longest leading decimal prefix is
/// read, so `"7.1 mg/L"` gives 7.1 and `"n/a"` gives 0. Overflowing values
/// also give 0.
pub fn parse_numeric_or_zero(text: &str) -> f64 {
    let t = text.trim_start();
    let end = numeric_prefix_len(t);
    if end == 0 {
        return 0.0;
    }
    match t[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Byte length of `[+-]?(digits[.digits]|.digits)([eE][+-]?digits)?` at the start of `s`.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Labels plus one value vector per measurement, index-aligned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    labels: Vec<String>,
    values: [Vec<f64>; 8],
}

impl SeriesSet {
    /// Extract with the default policy: newest-first source, no limit.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        extract_series(rows, SourceOrder::NewestFirst, None).set
    }

    pub fn labels(&self) -> &[String] { &self.labels }

    pub fn values(&self, m: Measurement) -> &[f64] { &self.values[m.index()] }

    /// `(measurement, values)` in `Measurement::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Measurement, &[f64])> + '_ {
        Measurement::ALL.into_iter().map(move |m| (m, self.values(m)))
    }

    /// Number of samples.
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Reverse labels and every series in place.
    pub fn reverse(&mut self) {
        self.labels.reverse();
        for v in self.values.iter_mut() {
            v.reverse();
        }
    }

    /// Drop samples from the front until at most `n` remain.
    pub fn keep_last(&mut self, n: usize) {
        let drop = self.labels.len().saturating_sub(n);
        if drop == 0 {
            return;
        }
        self.labels.drain(..drop);
        for v in self.values.iter_mut() {
            v.drain(..drop);
        }
    }

    fn push_row(&mut self, row: &[String], stats: &mut ExtractStats) {
        self.labels.push(row[LABEL_COL].clone());
        for m in Measurement::ALL {
            let cell = &row[m.column()];
            if numeric_prefix_len(cell.trim_start()) == 0 {
                stats.zero_filled += 1;
            }
            self.values[m.index()].push(parse_numeric_or_zero(cell));
        }
    }
}

/// What happened during one extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Data rows looked at (header excluded).
    pub rows_seen: usize,
    pub accepted: usize,
    pub skipped_short: usize,
    /// Cells with no numeric prefix that were charted as 0.
    pub zero_filled: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    pub set: SeriesSet,
    pub stats: ExtractStats,
}

/// Build the series from `rows`, where `rows[0]` is the header row.
pub fn extract_series(
    rows: &[Vec<String>],
    order: SourceOrder,
    limit: Option<usize>,
) -> Extraction {
    let mut set = SeriesSet::default();
    let mut stats = ExtractStats::default();

    for row in rows.iter().skip(1) {
        stats.rows_seen += 1;
        if row.len() < MIN_CELLS {
            stats.skipped_short += 1;
            continue;
        }
        set.push_row(row, &mut stats);
        stats.accepted += 1;
    }

    if order == SourceOrder::NewestFirst {
        set.reverse();
    }
    if let Some(n) = limit {
        set.keep_last(n);
    }

    logd!(
        "Extract: seen={} accepted={} short={} zero_filled={} kept={}",
        stats.rows_seen, stats.accepted, stats.skipped_short, stats.zero_filled, set.len()
    );

    Extraction { set, stats }
}
