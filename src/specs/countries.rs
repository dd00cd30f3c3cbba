// src/specs/countries.rs
//! Scraping *spec* for the country table on the worldometers front page.
//!
//! Layout (`<table id="main_table_countries_today">`):
//! - row 0: column headers
//! - next 8 rows: World + continent summaries
//! - country rows
//! - last 8 rows: footer totals
//!
//! Every kept row is read through [`COLUMN_MAP`]. A row shorter than the
//! highest mapped column means the page changed under us.

use crate::config::options::FetchOptions;
use crate::core::html::{self, blocks, cell_text};
use crate::error::{Error, Result};
use crate::record::{Field, RawRecord};

/// Which `<td>` (0-based) holds which field.
pub const COLUMN_MAP: &[(Field, usize)] = &[
    (Field::Country, 1),
    (Field::TotalCases, 2),
    (Field::TotalDeaths, 4),
    (Field::TotalRecovered, 6),
    (Field::TotalTests, 12),
    (Field::Population, 14),
];

/// Where the table is and how much of it to skip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout<'a> {
    pub table_id: &'a str,
    pub skip_head: usize,
    pub skip_tail: usize,
    pub columns: &'a [(Field, usize)],
}

impl<'a> TableLayout<'a> {
    pub fn from_options(opts: &'a FetchOptions) -> Self {
        Self {
            table_id: &opts.table_id,
            skip_head: opts.skip_head,
            skip_tail: opts.skip_tail,
            columns: COLUMN_MAP,
        }
    }

    /// Cells a row must have for every mapped column to exist.
    pub fn min_cells(&self) -> usize {
        self.columns.iter().map(|(_, ix)| ix + 1).max().unwrap_or(0)
    }
}

/// Read the country rows out of a full page.
pub fn extract(doc: &str, layout: &TableLayout<'_>) -> Result<Vec<RawRecord>> {
    let table = html::element_by_id(doc, "table", layout.table_id)
        .ok_or_else(|| Error::layout(format!("table #{} not found", layout.table_id)))?;

    // drop the header row, then the summary rows at both ends
    let rows: Vec<&str> = blocks(table, "tr").skip(1).collect();
    let end = rows.len().saturating_sub(layout.skip_tail);
    let selected = rows.get(layout.skip_head..end).unwrap_or(&[]);

    logd!(
        "Extract: #{} rows={} selected={} (skip {}+{})",
        layout.table_id,
        rows.len(),
        selected.len(),
        layout.skip_head,
        layout.skip_tail
    );

    let need = layout.min_cells();
    let mut out = Vec::with_capacity(selected.len());

    for (i, tr) in selected.iter().enumerate() {
        let cells: Vec<String> = blocks(tr, "td").map(cell_text).collect();
        if cells.len() < need {
            return Err(Error::layout(format!(
                "row {} has {} cells, expected at least {}",
                layout.skip_head + i + 1,
                cells.len(),
                need
            )));
        }

        let mut rec = RawRecord::default();
        for &(field, ix) in layout.columns {
            if let Some(slot) = rec.slot(field) {
                *slot = cells[ix].clone();
            }
        }
        out.push(rec);
    }

    Ok(out)
}
