// src/csv.rs
use std::io::{self, Write};

use crate::record::Snapshot;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header + one line per record, in the seven- or nine-column layout.
pub fn write_snapshot<W: Write>(mut w: W, snap: &Snapshot, include_rates: bool, sep: char) -> io::Result<()> {
    write_row(&mut w, &Snapshot::headers(include_rates), sep)?;
    for row in snap.rows(include_rates) {
        write_row(&mut w, &row, sep)?;
    }
    Ok(())
}

/// The whole export as a string (what the dashboard's Copy puts on the clipboard).
pub fn snapshot_to_string(snap: &Snapshot, include_rates: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_snapshot(&mut buf, snap, include_rates, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
