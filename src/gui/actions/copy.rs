// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(snap) = app.snapshot() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    let txt = csv::snapshot_to_string(snap, export.include_rates, export.delim());
    logf!("Copy: rows={}, format={:?}", snap.len(), export.format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
