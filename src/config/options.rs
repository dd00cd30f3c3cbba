// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
    pub store: StoreOptions,
}

/* ---------------- Fetch + extract ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub table_id: String,
    pub skip_head: usize,
    pub skip_tail: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            table_id: s!(TABLE_ID),
            skip_head: SKIP_HEAD_ROWS,
            skip_tail: SKIP_TAIL_ROWS,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Nine columns (with Recovery/Death Rate) instead of seven.
    pub include_rates: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_rates: true,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// Delimited-text target: `<dir>/<stem>.<ext>`, extension follows the format.
    pub fn table_path(&self) -> PathBuf {
        let stem = self.out_path.table_stem.to_string_lossy();
        self.out_path.dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Spreadsheet target: `<dir>/<sheet file>`.
    pub fn sheet_path(&self) -> PathBuf {
        self.out_path.dir.join(&self.out_path.sheet_file)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    pub fn set_out_dir(&mut self, dir: impl Into<PathBuf>) {
        self.out_path.dir = dir.into();
    }

    /// Parse user text into the table stem. Ignores a pasted extension; format controls it.
    pub fn set_table_name(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(stem) = p.file_stem() {
            self.out_path.table_stem = stem.to_os_string();
        }
    }

    /// Spreadsheet file name; `.xlsx` is appended when missing.
    pub fn set_sheet_name(&mut self, text: &str) {
        let name = text.trim();
        if name.is_empty() { return; }
        let p = Path::new(name);
        let file = match p.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => OsString::from(name),
            _ => OsString::from(join!(name, ".xlsx")),
        };
        self.out_path.sheet_file = file;
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    table_stem: OsString, // without extension
    sheet_file: OsString,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            table_stem: OsString::from(DEFAULT_TABLE_STEM),
            sheet_file: OsString::from(DEFAULT_SHEET_FILE),
        }
    }
}

/* ---------------- Document store ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            uri: s!(MONGO_URI),
            database: s!(MONGO_DB),
            collection: s!(MONGO_COLLECTION),
        }
    }
}
