// src/params.rs
use std::path::{Path, PathBuf};

use crate::config::options::{ExportOptions, RenderOptions, SourceOrder};

/// What kind of file the samples come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Rendered page holding the sample table.
    Html,
    /// Record file with a header line.
    Csv,
    Tsv,
}

impl InputKind {
    /// Guess from the extension; anything unknown is treated as a page.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("csv") => InputKind::Csv,
            Some("tsv") | Some("tab") => InputKind::Tsv,
            _ => InputKind::Html,
        }
    }

    /// Pages list the newest sample first; record files are appended.
    pub fn default_order(&self) -> SourceOrder {
        match self {
            InputKind::Html => SourceOrder::NewestFirst,
            InputKind::Csv | InputKind::Tsv => SourceOrder::OldestFirst,
        }
    }

    pub fn delim(&self) -> Option<char> {
        match self {
            InputKind::Html => None,
            InputKind::Csv => Some(','),
            InputKind::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub input: PathBuf,                  // page or record file
    pub input_kind: InputKind,
    pub order: Option<SourceOrder>,      // None → input kind default
    pub render: RenderOptions,
    pub export: ExportOptions,
    pub style: Option<PathBuf>,          // style file to apply
    pub write_style: Option<PathBuf>,    // dump effective style here
}

impl Params {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let input_kind = InputKind::from_path(&input);
        Self {
            input,
            input_kind,
            order: None,
            render: RenderOptions::default(),
            export: ExportOptions::default(),
            style: None,
            write_style: None,
        }
    }

    /// Render options with the source order resolved.
    pub fn effective_render(&self) -> RenderOptions {
        RenderOptions {
            order: self.order.unwrap_or_else(|| self.input_kind.default_order()),
            ..self.render.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(InputKind::from_path(Path::new("a/history.HTML")), InputKind::Html);
        assert_eq!(InputKind::from_path(Path::new("alice_records.csv")), InputKind::Csv);
        assert_eq!(InputKind::from_path(Path::new("x.tsv")), InputKind::Tsv);
        assert_eq!(InputKind::from_path(Path::new("noext")), InputKind::Html);
    }

    #[test]
    fn order_follows_input_unless_set() {
        let mut p = Params::new("alice_records.csv");
        assert_eq!(p.effective_render().order, SourceOrder::OldestFirst);
        p.order = Some(SourceOrder::NewestFirst);
        assert_eq!(p.effective_render().order, SourceOrder::NewestFirst);
        assert_eq!(Params::new("history.html").effective_render().order, SourceOrder::NewestFirst);
    }
}
