// src/runner.rs
//
// The one pipeline both frontends call. Files are only written once the
// page has been fully extracted and cleaned, so a failed run leaves the
// previous outputs untouched.

use std::path::PathBuf;

use crate::config::options::{AppOptions, ExportOptions};
use crate::error::Result;
use crate::file::{write_sheet, write_table};
use crate::progress::{Progress, Stage};
use crate::record::Snapshot;
use crate::scrape::{collect_snapshot, CleanReport, Scraped};

/// Summary of what was produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub snapshot: Snapshot,
    pub report: CleanReport,
    pub files_written: Vec<PathBuf>,
}

/// Number of stages `run` reports through `Progress::stage_done`.
pub const STAGES: usize = 4;

/// Fetch, extract, clean, then write both files.
pub fn run(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    progress.begin(STAGES);
    let res = collect_snapshot(&opts.fetch, progress).and_then(|s| export(s, &opts.export, progress));
    if let Err(e) = &res {
        loge!("Run failed: {e}");
        progress.log(&e.to_string());
    }
    progress.finish();
    res
}

/// Write an already-cleaned snapshot to the delimited file and the spreadsheet.
pub fn export(scraped: Scraped, export: &ExportOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let Scraped { snapshot, report } = scraped;

    let table = write_table(&snapshot, export)?;
    progress.log(&format!("Wrote {}", table.display()));
    let sheet = write_sheet(&snapshot, export)?;
    progress.log(&format!("Wrote {}", sheet.display()));
    progress.stage_done(Stage::Export);

    Ok(RunSummary { snapshot, report, files_written: vec![table, sheet] })
}
