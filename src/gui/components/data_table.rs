// src/gui/components/data_table.rs
//
// The loaded sample table, header row first, exactly as read.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::table::Table;

pub fn draw(ui: &mut egui::Ui, table: Option<&Table>) {
    let Some(table) = table else {
        ui.weak("No samples loaded");
        return;
    };
    let cols = table.column_count();
    if cols == 0 {
        ui.weak("Table is empty");
        return;
    }
    let header = table.header().unwrap_or(&[]);
    let rows = table.data_rows();

    egui::ScrollArea::horizontal()
        .id_salt("samples_hscroll")
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0)
                .columns(Column::initial(90.0).at_least(40.0).clip(true), cols)
                .header(22.0, |mut row| {
                    for ci in 0..cols {
                        row.col(|ui| {
                            ui.strong(header.get(ci).map(String::as_str).unwrap_or(""));
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, rows.len(), |mut row| {
                        let cells = &rows[row.index()];
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.label(cells.get(ci).map(String::as_str).unwrap_or(""));
                            });
                        }
                    });
                });
        });
}
