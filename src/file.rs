// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Format, Workbook};

use crate::config::consts::SHEET_NAME;
use crate::config::options::ExportOptions;
use crate::csv::write_snapshot;
use crate::error::{Error, Result};
use crate::record::{CountryRecord, Field, Snapshot};

/// Write the delimited-text export, overwriting. Returns the path written.
pub fn write_table(snap: &Snapshot, export: &ExportOptions) -> Result<PathBuf> {
    let path = export.table_path();
    ensure_parent(&path)?;

    let file = File::create(&path).map_err(|e| Error::io(&path, e))?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_snapshot(&mut out, snap, export.include_rates, export.delim())
        .and_then(|_| out.flush())
        .map_err(|e| Error::io(&path, e))?;

    logf!("Export: {} rows → {}", snap.len(), path.display());
    Ok(path)
}

/// Write the spreadsheet export, overwriting. Numbers stay numeric; null rates are blank.
pub fn write_sheet(snap: &Snapshot, export: &ExportOptions) -> Result<PathBuf> {
    let path = export.sheet_path();
    ensure_parent(&path)?;

    let cols = Field::columns(export.include_rates);
    let bold = Format::new().set_bold();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (c, field) in cols.iter().enumerate() {
        sheet.write_string_with_format(0, c as u16, field.label(), &bold)?;
    }
    for (r, rec) in snap.iter().enumerate() {
        let row = r as u32 + 1;
        for (c, field) in cols.iter().enumerate() {
            let col = c as u16;
            match sheet_cell(rec, *field) {
                Some(SheetCell::Text(s)) => { sheet.write_string(row, col, s)?; }
                Some(SheetCell::Number(v)) => { sheet.write_number(row, col, v)?; }
                None => {}
            }
        }
    }

    workbook.save(&path)?;
    logf!("Export: {} rows → {}", snap.len(), path.display());
    Ok(path)
}

/// Largest integer an xlsx number cell (an f64) holds exactly.
const MAX_EXACT_NUMBER: u128 = 1 << 53;

#[derive(Debug, PartialEq)]
enum SheetCell {
    Text(String),
    Number(f64),
}

/// What goes in one spreadsheet cell. Counts too large for an exact number
/// cell are written as text; null rates stay blank.
fn sheet_cell(rec: &CountryRecord, field: Field) -> Option<SheetCell> {
    if field == Field::Country {
        return Some(SheetCell::Text(rec.country.clone()));
    }
    match rec.integer(field) {
        Some(n) if n.unsigned_abs() <= MAX_EXACT_NUMBER => Some(SheetCell::Number(n as f64)),
        Some(n) => Some(SheetCell::Text(n.to_string())),
        None => rec.value(field).map(SheetCell::Number),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_keep_their_kind() {
        let rec = CountryRecord::new("A", 1000, 10, 900, 5_000, 20_000);
        assert_eq!(sheet_cell(&rec, Field::Country), Some(SheetCell::Text(s!("A"))));
        assert_eq!(sheet_cell(&rec, Field::TotalCases), Some(SheetCell::Number(1000.0)));
        assert_eq!(sheet_cell(&rec, Field::ActiveCases), Some(SheetCell::Number(90.0)));
        assert_eq!(sheet_cell(&rec, Field::RecoveryRate), Some(SheetCell::Number(90.0)));

        let zero = CountryRecord::new("C", 0, 0, 0, 100, 0);
        assert_eq!(sheet_cell(&zero, Field::DeathRate), None);
    }

    #[test]
    fn counts_past_f64_precision_become_text() {
        let exact = 1u64 << 53;
        let rec = CountryRecord::new("P", exact, 0, 0, exact + 1, 0);
        assert_eq!(sheet_cell(&rec, Field::TotalCases), Some(SheetCell::Number(exact as f64)));
        assert_eq!(sheet_cell(&rec, Field::Population), Some(SheetCell::Text(s!("9007199254740993"))));
    }
}
