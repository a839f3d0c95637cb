// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod extract;
pub mod file;
pub mod gui;
pub mod page;
pub mod params;
pub mod render;
pub mod runner;
pub mod table;

pub use error::Error;
