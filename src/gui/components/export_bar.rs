// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{config::options::ExportFormat, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        ui.horizontal(|ui| {
            ui.label("Format:");
            let prev = export.format;
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            if export.format != prev {
                logf!("UI: Export format → {:?}", export.format);
            }

            ui.separator();

            let before = export.include_rates;
            ui.checkbox(&mut export.include_rates, "Include recovery/death rates");
            if export.include_rates != before {
                logf!("UI: include_rates → {}", export.include_rates);
            }
        });
    }

    ui.horizontal(|ui| {
        ui.label("Folder:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(140.0));
        ui.label("Table:");
        ui.add(egui::TextEdit::singleline(&mut app.table_name_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(140.0));
        ui.label(format!(".{}", app.state.options.export.format.ext()));
        ui.label("Workbook:");
        ui.add(egui::TextEdit::singleline(&mut app.sheet_name_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(180.0));
    });

    // --- Actions (SCRAPE / Export / Copy / Store) ---
    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red))
            .clicked()
        {
            actions::scrape(app);
        }

        let has_data = app.summary.is_some();
        if ui.add_enabled(has_data, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(has_data, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_data, egui::Button::new("Store in MongoDB")).clicked() {
            actions::store(app);
        }

        ui.label(format!("Status: {}", app.status_text()));
    });

    match &app.store_message {
        Some(Ok(msg)) => { ui.label(msg); }
        Some(Err(msg)) => {
            let red = ui.visuals().error_fg_color;
            ui.colored_label(red, msg);
        }
        None => {}
    }
}
