// src/gui/actions/export.rs
use crate::{gui::app::App, runner, scrape::Scraped};

use super::scrape::apply_export_fields;

/// Re-write both files from the snapshot on screen (no new scrape).
pub fn export(app: &mut App) {
    apply_export_fields(app);

    let Some(summary) = app.summary.as_ref() else {
        logd!("Export: Clicked, but there's nothing to export");
        return app.status("Nothing to export");
    };

    let scraped = Scraped { snapshot: summary.snapshot.clone(), report: summary.report.clone() };
    let mut prog = crate::progress::NullProgress;

    logf!("Export: Begin rows={}", scraped.snapshot.len());
    let status_msg = match runner::export(scraped, &app.state.options.export, &mut prog) {
        Ok(done) => {
            let last = done.files_written.last().map(|p| p.display().to_string()).unwrap_or_default();
            logf!("Export: OK count={} last={}", done.files_written.len(), last);
            let msg = format!("Exported {} file(s). Last: {}", done.files_written.len(), last);
            app.summary = Some(done);
            msg
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
