// src/gui/table_model.rs
//! TableModel: display cells for one dashboard table.
//!
//! Built once per scrape from the snapshot, so drawing a frame never
//! formats numbers.

use crate::record::{CountryRecord, Field, Snapshot};

/// The table model used by the GUI
#[derive(Clone, Debug, Default)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Per column: right-align?
    pub numeric: Vec<bool>,
}

impl TableModel {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snap: &Snapshot, fields: &[Field]) -> Self {
        Self::from_records(snap.iter(), fields)
    }

    pub fn from_records<'a>(records: impl Iterator<Item = &'a CountryRecord>, fields: &[Field]) -> Self {
        Self {
            headers: fields.iter().map(|f| s!(f.label())).collect(),
            rows: records
                .map(|r| fields.iter().map(|f| r.display(*f)).collect())
                .collect(),
            numeric: fields.iter().map(|f| f.is_numeric()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}
