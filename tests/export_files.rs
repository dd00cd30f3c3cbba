// tests/export_files.rs
//
// Both file sinks against a temp directory.

mod common;

use std::fs;

use covid_impact::config::options::{ExportFormat, ExportOptions, FetchOptions};
use covid_impact::file::{write_sheet, write_table};
use covid_impact::progress::NullProgress;
use covid_impact::runner;
use covid_impact::scrape::{from_html, Scraped};

fn scraped() -> Scraped {
    from_html(&common::page(&common::abc()), &FetchOptions::default(), &mut NullProgress).unwrap()
}

fn export_in(dir: &std::path::Path) -> ExportOptions {
    let mut export = ExportOptions::default();
    export.set_out_dir(dir.join("nested").join("out"));
    export
}

#[test]
fn runner_writes_both_files() {
    let tmp = tempfile::tempdir().unwrap();
    let export = export_in(tmp.path());

    let summary = runner::export(scraped(), &export, &mut NullProgress).unwrap();
    assert_eq!(summary.files_written, vec![export.table_path(), export.sheet_path()]);
    assert!(export.table_path().ends_with("covid_impact.csv"));
    assert!(export.sheet_path().ends_with("covid_data_cleaned.xlsx"));

    let text = fs::read_to_string(export.table_path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Country,Total Cases,Total Deaths,Total Recovered,Population,Total Tests,Active Cases,Recovery Rate,Death Rate"
    );
    assert_eq!(lines[1], "A,1000,10,900,5000,20000,90,90.0,1.0");
    assert_eq!(lines[2], "B,500,5,0,8000,1000,495,0.0,1.0");
    assert_eq!(lines[3], "C,0,0,0,100,0,0,,");

    let sheet = fs::read(export.sheet_path()).unwrap();
    assert!(sheet.starts_with(b"PK"), "xlsx is a zip container");
}

#[test]
fn seven_column_tsv() {
    let tmp = tempfile::tempdir().unwrap();
    let mut export = export_in(tmp.path());
    export.format = ExportFormat::Tsv;
    export.include_rates = false;

    let path = write_table(&scraped().snapshot, &export).unwrap();
    assert!(path.ends_with("covid_impact.tsv"));

    let text = fs::read_to_string(path).unwrap();
    let header: Vec<&str> = text.lines().next().unwrap().split('\t').collect();
    assert_eq!(header.len(), 7);
    assert_eq!(header[6], "Active Cases");
    assert_eq!(text.lines().nth(1), Some("A\t1000\t10\t900\t5000\t20000\t90"));
}

#[test]
fn files_are_overwritten() {
    let tmp = tempfile::tempdir().unwrap();
    let export = export_in(tmp.path());
    fs::create_dir_all(export.out_dir()).unwrap();
    fs::write(export.table_path(), "stale\n".repeat(100)).unwrap();

    write_table(&scraped().snapshot, &export).unwrap();
    let text = fs::read_to_string(export.table_path()).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 4);

    fs::write(export.sheet_path(), "not a workbook").unwrap();
    write_sheet(&scraped().snapshot, &export).unwrap();
    assert!(fs::read(export.sheet_path()).unwrap().starts_with(b"PK"));
}

#[test]
fn file_in_place_of_directory_is_an_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocked");
    fs::write(&blocker, "").unwrap();

    let mut export = ExportOptions::default();
    export.set_out_dir(&blocker);
    let err = write_table(&scraped().snapshot, &export).unwrap_err();
    assert!(matches!(err, covid_impact::error::Error::Io { .. }), "{err}");
}
