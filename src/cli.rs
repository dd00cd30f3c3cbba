// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::analysis::{compare, describe, top_by_cases, Summary};
use crate::config::consts::{COMPARE_DEFAULT_COUNT, MONGO_URI, MONGO_URI_ENV, SOURCE_URL, TOP_N_DEFAULT};
use crate::config::options::{AppOptions, ExportFormat};
use crate::error::Result;
use crate::progress::{Progress, Stage};
use crate::record::{CountryRecord, Field};
use crate::runner::{self, RunSummary};
use crate::store::store_snapshot;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f { Format::Csv => ExportFormat::Csv, Format::Tsv => ExportFormat::Tsv }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Scrape, clean and export the worldometers COVID-19 country table")]
pub struct Args {
    /// Page to scrape
    #[arg(long, default_value = SOURCE_URL)]
    pub url: String,

    /// Directory for both output files
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Delimited-text file name (extension follows --format)
    #[arg(long, value_name = "NAME")]
    pub csv: Option<String>,

    /// Spreadsheet file name
    #[arg(long, value_name = "NAME")]
    pub xlsx: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Seven columns: leave out Recovery Rate and Death Rate
    #[arg(long)]
    pub no_rates: bool,

    /// How many top countries (by total cases) to print
    #[arg(short = 'n', long, default_value_t = TOP_N_DEFAULT)]
    pub top: usize,

    /// Countries to compare (default: the first two scraped)
    #[arg(long, value_delimiter = ',')]
    pub compare: Vec<String>,

    /// Also insert the records into MongoDB
    #[arg(long)]
    pub store: bool,

    #[arg(long, env = MONGO_URI_ENV, default_value = MONGO_URI)]
    pub mongo_uri: String,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.fetch.url = self.url.clone();

        let export = &mut opts.export;
        export.format = self.format.into();
        export.include_rates = !self.no_rates;
        if let Some(dir) = &self.out_dir { export.set_out_dir(dir); }
        if let Some(name) = &self.csv { export.set_table_name(name); }
        if let Some(name) = &self.xlsx { export.set_sheet_name(name); }

        opts.store.uri = self.mongo_uri.clone();
        opts
    }
}

/// Stage lines on stderr.
struct CliProgress {
    quiet: bool,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("{msg}"); }
    }
    fn stage_done(&mut self, stage: Stage) {
        if !self.quiet { eprintln!("[{}]", stage.label()); }
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.to_options();
    let mut progress = CliProgress { quiet: args.quiet };
    let summary = runner::run(&opts, &mut progress)?;

    if !args.quiet {
        print_report(&summary, &args);
    }

    // the files are already on disk; a store failure does not fail the run
    if args.store {
        match store_snapshot(&opts.store, &summary.snapshot) {
            Ok(n) => if !args.quiet { println!("Stored {n} documents in MongoDB") },
            Err(e) => eprintln!("MongoDB upload failed: {e}"),
        }
    }
    Ok(())
}

fn print_report(summary: &RunSummary, args: &Args) {
    let snap = &summary.snapshot;
    let rep = &summary.report;

    println!(
        "{} countries ({} scraped, {} dropped for missing values, {} duplicates, {} with zero cases)",
        snap.len(), rep.scraped, rep.dropped_missing, rep.duplicates, rep.zero_case
    );
    for path in &summary.files_written {
        println!("  {}", path.display());
    }

    println!("\nStatistics");
    println!("{:<16} {:>6} {:>16} {:>16} {:>16} {:>16}", "", "count", "mean", "min", "median", "max");
    for s in describe(snap) {
        print_summary(&s);
    }

    println!("\nTop {} by total cases", args.top);
    for rec in top_by_cases(snap, args.top) {
        print_record(rec);
    }

    let picked: Vec<String> = if args.compare.is_empty() {
        snap.countries().take(COMPARE_DEFAULT_COUNT).map(String::from).collect()
    } else {
        args.compare.clone()
    };
    let rows = compare(snap, &picked);
    if !rows.is_empty() {
        println!("\nComparison");
        for rec in rows {
            print_record(rec);
        }
    }
}

fn print_summary(s: &Summary) {
    let f = |v: Option<f64>| v.map(|v| format!("{v:.2}")).unwrap_or_else(|| s!("—"));
    println!(
        "{:<16} {:>6} {:>16} {:>16} {:>16} {:>16}",
        s.field.label(), s.count, f(s.mean), f(s.min), f(s.median), f(s.max)
    );
}

fn print_record(rec: &CountryRecord) {
    println!(
        "  {:<24} cases {:>14}  recovered {:>14}  recovery {:>6}%  deaths {:>6}%",
        rec.country,
        rec.display(Field::TotalCases),
        rec.display(Field::TotalRecovered),
        rec.display(Field::RecoveryRate),
        rec.display(Field::DeathRate),
    );
}
