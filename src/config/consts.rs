// src/config/consts.rs

// Page elements
pub const TABLE_ID: &str = "dataTable";
pub const SURFACE_ID: &str = "trendChart";

// Extraction
pub const MIN_CELLS: usize = 10;
pub const LABEL_COL: usize = 0;

// Chart look
pub const CHART_TYPE: &str = "line";
pub const TENSION: f64 = 0.3;
pub const TITLE_TEXT: &str = "Water Composition Trends Over Time";
pub const X_AXIS_TITLE: &str = "Sample Date & Time";
pub const Y_AXIS_TITLE: &str = "Concentration (mg/L or ppm)";
pub const TITLE_COLOR: &str = "#023e8a";
pub const TITLE_FONT_SIZE: u32 = 18;
pub const AXIS_FONT_SIZE: u32 = 14;
pub const LEGEND_POSITION: &str = "bottom";
pub const LEGEND_BOX_WIDTH: u32 = 20;
pub const LEGEND_COLOR: &str = "#333";
pub const TICK_COLOR: &str = "#444";
pub const GRID_COLOR: &str = "rgba(0,0,0,0.05)";
pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "trends";
pub const DEFAULT_PNG_SIZE: (u32, u32) = (1200, 800);

// GUI
pub const LOG_FILE: &str = ".store/debug.log";
