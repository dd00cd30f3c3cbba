// src/gui/components/data_table.rs
//
// Draws one TableModel. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::table_model::TableModel;

pub fn draw(ui: &mut egui::Ui, model: &TableModel, id: &str) {
    if model.is_empty() {
        ui.weak("No data yet. Press Scrape.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt((id, "hscroll"))
        .max_height(avail_h)
        .show(ui, |ui| inner_table(ui, model, id));
}

fn inner_table(ui: &mut egui::Ui, model: &TableModel, id: &str) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(id);
    for ci in 0..model.ncols() {
        let w = if ci == 0 { 200.0 } else { 120.0 };
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    let align = |ci: usize| {
        if model.numeric.get(ci).copied().unwrap_or(false) {
            Layout::right_to_left(Align::Center)
        } else {
            Layout::left_to_right(Align::Center)
        }
    };

    table
        .header(24.0, |mut header| {
            for (ci, h) in model.headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.with_layout(align(ci), |ui| {
                        ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, model.nrows(), |mut row| {
                let Some(cells) = model.rows.get(row.index()) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.with_layout(align(ci), |ui| { ui.label(cell); });
                    });
                }
            });
        });
}
