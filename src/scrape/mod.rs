// src/scrape/mod.rs
//! Fetch → extract → clean. Produces a [`Snapshot`] and never touches disk.

mod clean;

pub use clean::{normalize, CleanReport};

use crate::config::options::FetchOptions;
use crate::core::net::http_get;
use crate::error::Result;
use crate::progress::{Progress, Stage};
use crate::record::Snapshot;
use crate::specs::countries::{self, TableLayout};

/// Result of one scrape: the cleaned snapshot and what cleaning did.
#[derive(Clone, Debug, Default)]
pub struct Scraped {
    pub snapshot: Snapshot,
    pub report: CleanReport,
}

/// Run the network half of the pipeline.
pub fn collect_snapshot(opts: &FetchOptions, progress: &mut dyn Progress) -> Result<Scraped> {
    progress.log(&format!("Fetching {}", opts.url));
    let doc = http_get(&opts.url)?;
    progress.stage_done(Stage::Fetch);

    from_html(&doc, opts, progress)
}

/// Extract and clean an already-fetched page.
pub fn from_html(doc: &str, opts: &FetchOptions, progress: &mut dyn Progress) -> Result<Scraped> {
    let raw = countries::extract(doc, &TableLayout::from_options(opts))?;
    progress.log(&format!("{} country rows", raw.len()));
    progress.stage_done(Stage::Extract);

    let (snapshot, report) = normalize(raw)?;
    progress.stage_done(Stage::Clean);

    Ok(Scraped { snapshot, report })
}
