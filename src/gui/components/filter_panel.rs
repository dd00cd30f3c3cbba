// src/gui/components/filter_panel.rs
//
// Left panel: the two display filters. Neither touches the pipeline; they
// only decide what the chart tabs show.

use eframe::egui;

use crate::config::consts::{TOP_N_MAX, TOP_N_MIN};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    ui.label("How many top-ranked countries to display");
    let before = app.state.gui.top_n;
    ui.add(egui::Slider::new(&mut app.state.gui.top_n, TOP_N_MIN..=TOP_N_MAX));
    if app.state.gui.top_n != before {
        logd!("UI: top_n → {}", app.state.gui.top_n);
    }

    ui.separator();
    ui.label("Countries to compare");

    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.country_filter).hint_text("filter…"));
        if ui.button("Clear").clicked() {
            app.state.gui.compare.clear();
            logd!("UI: compare cleared");
        }
    });

    // picked ones first, in pick order
    if !app.state.gui.compare.is_empty() {
        ui.label(app.state.gui.compare.join(", "));
    }

    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let Some(snap) = app.summary.as_ref().map(|s| &s.snapshot) else {
        ui.weak("No data yet");
        return;
    };

    let needle = app.state.gui.country_filter.trim().to_lowercase();
    let gui = &mut app.state.gui;

    egui::ScrollArea::vertical()
        .id_salt("countries_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for name in snap.countries() {
                if !needle.is_empty() && !name.to_lowercase().contains(&needle) {
                    continue;
                }
                let is_selected = gui.compare.iter().any(|c| c == name);
                if ui.selectable_label(is_selected, name).clicked() {
                    if is_selected {
                        gui.compare.retain(|c| c != name);
                    } else {
                        gui.compare.push(s!(name));
                    }
                    logf!("UI: Compare selection ({}) — {:?}", gui.compare.len(), gui.compare);
                }
            }
        });
}
