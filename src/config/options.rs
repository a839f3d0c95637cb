// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::error::Error;

/// How the source table is ordered. Output is always oldest-first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceOrder {
    /// Rendered history page: newest sample on top.
    #[default]
    NewestFirst,
    /// Record files: samples appended as they are taken.
    OldestFirst,
}

impl SourceOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest-first" | "newest" => Some(Self::NewestFirst),
            "oldest-first" | "oldest" => Some(Self::OldestFirst),
            _ => None,
        }
    }
}

/// Where to look on the page and how to shape the extracted series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub table_id: String,
    pub surface_id: String,
    pub order: SourceOrder,
    /// Keep only the N most recent samples.
    pub limit: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_id: s!(TABLE_ID),
            surface_id: s!(SURFACE_ID),
            order: SourceOrder::NewestFirst,
            limit: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
    Png,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            "png" => Ok(Self::Png),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            other => Err(Error::UnknownFormat(s!(other))),
        }
    }

    pub fn ext(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
            Self::Png => "png",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
        }
    }

    /// Field separator for the tabular export formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            Self::Csv => Some(','),
            Self::Tsv => Some('\t'),
            _ => None,
        }
    }

    /// PNG goes through a file-backed drawing area; the rest can stream.
    pub fn is_text(&self) -> bool { !matches!(self, Self::Png) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: OutputFormat,
    /// File path, directory hint (trailing separator) or "-" for stdout.
    pub out: Option<PathBuf>,
    pub size: (u32, u32),
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            out: None,
            size: DEFAULT_PNG_SIZE,
        }
    }
}

impl ExportOptions {
    pub fn default_file_name(&self) -> String {
        join!(DEFAULT_FILE, ".", self.format.ext())
    }

    pub fn is_stdout(&self) -> bool {
        self.out.as_deref().map(|p| p.as_os_str() == "-").unwrap_or(false)
    }
}

/// "1200x800" → (1200, 800)
pub fn parse_size(size_str: &str) -> Result<(u32, u32), Error> {
    let invalid = || Error::InvalidSize(s!(size_str));

    let parts: Vec<&str> = size_str.split('x').collect();
    if parts.len() != 2 {
        return Err(invalid());
    }
    let width = parts[0].trim().parse::<u32>().map_err(|_| invalid())?;
    let height = parts[1].trim().parse::<u32>().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_valid_formats() {
        assert_eq!(parse_size("1200x800").unwrap(), (1200, 800));
        assert_eq!(parse_size("640x480").unwrap(), (640, 480));
    }

    #[test]
    fn parse_size_invalid_formats() {
        for bad in ["1200", "1200x", "x800", "axb", "0x800", "1200x0", "", "1x2x3"] {
            assert!(parse_size(bad).is_err(), "should fail for {bad:?}");
        }
    }

    #[test]
    fn format_names_round_trip_through_ext() {
        for f in [OutputFormat::Json, OutputFormat::Html, OutputFormat::Png, OutputFormat::Csv, OutputFormat::Tsv] {
            assert_eq!(OutputFormat::parse(f.ext()).unwrap(), f);
        }
        assert!(matches!(OutputFormat::parse("svg"), Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn source_order_names() {
        assert_eq!(SourceOrder::parse("Oldest-First"), Some(SourceOrder::OldestFirst));
        assert_eq!(SourceOrder::parse("newest"), Some(SourceOrder::NewestFirst));
        assert_eq!(SourceOrder::parse("sideways"), None);
    }
}
