// src/error.rs

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart rendering error: {0}")]
    Render(String),

    #[error("Style file line {line}: {msg}")]
    Style { line: usize, msg: String },

    #[error("Invalid size format: {0}. Expected format: WIDTHxHEIGHT")]
    InvalidSize(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("Output error: {0}")]
    Output(String),
}
