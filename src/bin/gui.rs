// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::{Path, PathBuf};

use eframe::egui::{IconData, ViewportBuilder};
use water_trends::{config::consts::LOG_FILE, gui, log};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/water_trends.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    if let Err(e) = log::init(tracing::Level::INFO, Some(Path::new(LOG_FILE))) {
        eprintln!("Logging disabled: {}", e);
    }

    let input = std::env::args_os().nth(1).map(PathBuf::from);

    let mut viewport = ViewportBuilder::default().with_inner_size([1100.0, 760.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, input) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
