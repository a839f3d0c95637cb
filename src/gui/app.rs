// src/gui/app.rs
use std::{
    error::Error as StdError,
    path::{Path, PathBuf},
};

use eframe::egui;

use crate::{
    config::{options::{RenderOptions, SourceOrder}, style::ChartStyle},
    error::Error,
    page::{Document, HtmlPage, TableDocument},
    params::InputKind,
    render::{render_trends, ChartSummary},
    table::Table,
};

use super::components::{data_table, load_bar, trend_plot::{self, PlotBackend}};

pub fn run(options: eframe::NativeOptions, input: Option<PathBuf>) -> Result<(), Box<dyn StdError>> {
    eframe::run_native(
        "Water Trends",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(input)))),
    )?;
    Ok(())
}

/// Source order chosen in the load bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderChoice {
    /// Pages list newest first, record files oldest first.
    #[default]
    Auto,
    Fixed(SourceOrder),
}

pub struct App {
    pub input_text: String,
    pub status: String,

    pub order: OrderChoice,
    /// 0 = all samples
    pub last_n: usize,

    pub render: RenderOptions,
    pub style: ChartStyle,

    // what is on screen
    pub table: Option<Table>,
    pub plot: PlotBackend,
    pub show_table: bool,
}

impl App {
    pub fn new(input: Option<PathBuf>) -> Self {
        let mut app = Self {
            input_text: input.as_ref().map(|p| p.display().to_string()).unwrap_or_default(),
            status: s!("Idle"),
            order: OrderChoice::Auto,
            last_n: 0,
            render: RenderOptions::default(),
            style: ChartStyle::default(),
            table: None,
            plot: PlotBackend::default(),
            show_table: true,
        };
        if input.is_some() {
            app.load();
        }
        logf!("Init: input={:?}", input);
        app
    }

    /// Load the path in the input field and redraw the chart once.
    pub fn load(&mut self) {
        let path = PathBuf::from(self.input_text.trim());
        if path.as_os_str().is_empty() {
            self.status = s!("Enter a page or record file to load");
            return;
        }

        self.status = match self.load_from(&path) {
            Ok(Some(summary)) => {
                let mut msg = format!("Loaded {} sample(s) from {}", summary.samples, path.display());
                if summary.stats.skipped_short > 0 {
                    msg.push_str(&format!(", {} short row(s) skipped", summary.stats.skipped_short));
                }
                msg
            }
            Ok(None) => format!("No table '{}' in {}", self.render.table_id, path.display()),
            Err(e) => {
                loge!("Load: {} failed: {}", path.display(), e);
                format!("Load failed: {e}")
            }
        };
    }

    fn load_from(&mut self, path: &Path) -> Result<Option<ChartSummary>, Error> {
        let kind = InputKind::from_path(path);
        let table = match kind.delim() {
            Some(sep) => Some(Table::load_csv(path, sep)?),
            None => HtmlPage::load(path)?.table(&self.render.table_id),
        };

        self.plot.clear();
        self.table = None;
        let Some(table) = table else {
            logd!("Load: no table '{}' in {}", self.render.table_id, path.display());
            return Ok(None);
        };

        // The plot panel is the drawing surface.
        let opts = self.effective_render(kind);
        let doc = TableDocument::new()
            .with_table(&opts.table_id, table.clone())
            .with_surface(&opts.surface_id);
        let summary = render_trends(&doc, &opts, &self.style, &mut self.plot)?;
        self.table = Some(table);
        Ok(summary)
    }

    fn effective_render(&self, kind: InputKind) -> RenderOptions {
        RenderOptions {
            order: match self.order {
                OrderChoice::Auto => kind.default_order(),
                OrderChoice::Fixed(o) => o,
            },
            limit: (self.last_n > 0).then_some(self.last_n),
            ..self.render.clone()
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("load_bar").show(ctx, |ui| {
            load_bar::draw(ui, self);
        });

        if self.show_table {
            egui::TopBottomPanel::bottom("samples")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    data_table::draw(ui, self.table.as_ref());
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            trend_plot::draw(ui, &self.plot);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_follows_input_kind_unless_fixed() {
        let mut app = App::new(None);
        assert_eq!(app.effective_render(InputKind::Html).order, SourceOrder::NewestFirst);
        assert_eq!(app.effective_render(InputKind::Csv).order, SourceOrder::OldestFirst);

        app.order = OrderChoice::Fixed(SourceOrder::NewestFirst);
        app.last_n = 5;
        let opts = app.effective_render(InputKind::Csv);
        assert_eq!(opts.order, SourceOrder::NewestFirst);
        assert_eq!(opts.limit, Some(5));
    }

    #[test]
    fn loading_a_record_file_fills_plot_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        std::fs::write(
            &path,
            "Date,pH,TDS,Ca,Mg,K,Na,SO4,Cl,Verdict\n\
             2024-01-01,7.0,100,1,2,3,4,5,6,ok\n\
             2024-02-01,7.2,110,1,2,3,4,5,6,ok\n",
        )
        .unwrap();

        let mut app = App::new(None);
        app.input_text = path.display().to_string();
        app.load();

        let cfg = app.plot.config().unwrap();
        assert_eq!(cfg.data.labels, vec!["2024-01-01", "2024-02-01"]);
        assert_eq!(cfg.data.datasets[0].data, vec![7.0, 7.2]);
        assert_eq!(app.table.as_ref().unwrap().row_count(), 2);
        assert!(app.status.starts_with("Loaded 2 sample(s)"));
    }

    #[test]
    fn missing_file_reports_in_status() {
        let mut app = App::new(None);
        app.input_text = s!("/definitely/not/here.html");
        app.load();
        assert!(app.status.starts_with("Load failed"));
        assert!(app.plot.config().is_none());
    }
}
