// src/gui/components/mod.rs
pub mod data_table;
pub mod load_bar;
pub mod trend_plot;
