// src/gui/actions/scrape.rs
use crate::{gui::app::App, gui::progress::GuiProgress, runner};

pub fn scrape(app: &mut App) {
    apply_export_fields(app);

    logf!("Scrape: Begin url={}", app.state.options.fetch.url);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    match runner::run(&app.state.options, &mut prog) {
        Ok(summary) => {
            logf!(
                "Scrape: OK countries={} files={}",
                summary.snapshot.len(),
                summary.files_written.len()
            );
            let msg = format!(
                "Ready: {} countries ({} dropped for missing values). Wrote {} file(s).",
                summary.snapshot.len(),
                summary.report.dropped_missing,
                summary.files_written.len()
            );
            app.set_summary(summary);
            app.store_message = None;
            app.status(msg);
        }
        // previous results stay on screen
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            let what = if e.is_pipeline() { "Scrape failed" } else { "Export failed" };
            app.status(format!("{what}: {e}"));
        }
    }
}

/// Text fields → ExportOptions. Blank fields keep the current value.
pub(super) fn apply_export_fields(app: &mut App) {
    let export = &mut app.state.options.export;
    let dir = app.out_dir_text.trim();
    if !dir.is_empty() {
        export.set_out_dir(dir);
    }
    if !app.table_name_text.trim().is_empty() {
        export.set_table_name(&app.table_name_text);
    }
    export.set_sheet_name(&app.sheet_name_text);
    logd!(
        "UI: export targets → {} | {}",
        export.table_path().display(),
        export.sheet_path().display()
    );
}
