// src/gui/components/load_bar.rs
//
// Input path, source order, sample limit and the Load button. Changing the
// order or limit re-runs the load so the chart is rebuilt from scratch.

use eframe::egui;

use crate::config::options::SourceOrder;
use crate::gui::app::{App, OrderChoice};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut reload = false;

    ui.horizontal(|ui| {
        ui.label("Input:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.input_text)
                .hint_text("history.html or records.csv")
                .desired_width(360.0)
                .font(egui::TextStyle::Monospace),
        );
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            reload = true;
        }
        if ui.button("Load").clicked() {
            logd!("UI: Load clicked → {}", app.input_text);
            reload = true;
        }
    });

    ui.horizontal(|ui| {
        ui.label("Order:");
        let before = app.order;
        ui.selectable_value(&mut app.order, OrderChoice::Auto, "Auto");
        ui.selectable_value(&mut app.order, OrderChoice::Fixed(SourceOrder::NewestFirst), "Newest first");
        ui.selectable_value(&mut app.order, OrderChoice::Fixed(SourceOrder::OldestFirst), "Oldest first");
        if app.order != before {
            logf!("UI: Order → {:?}", app.order);
            reload |= app.table.is_some();
        }

        ui.separator();
        ui.label("Last:");
        let resp = ui.add(egui::DragValue::new(&mut app.last_n).range(0..=10_000));
        if resp.changed() {
            reload |= app.table.is_some();
        }
        ui.label(if app.last_n == 0 { "(all)" } else { "samples" });

        ui.separator();
        ui.checkbox(&mut app.show_table, "Show table");
    });

    if reload {
        app.load();
    }

    ui.label(egui::RichText::new(&app.status).weak());
}
