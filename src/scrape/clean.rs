// src/scrape/clean.rs
//
// RawRecord text → typed CountryRecord.
// - numeric cells lose separators/whitespace and must parse as u64 <= i64::MAX
// - a row with any absent field is dropped (no imputation)
// - a present-but-not-numeric cell is fatal
// - first occurrence of a country wins

use std::collections::HashSet;

use crate::core::sanitize::{clean_name, strip_number};
use crate::error::{Error, Result};
use crate::record::{CountryRecord, Field, RawRecord, Snapshot};

/// What cleaning did to the scraped rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Raw rows in
    pub scraped: usize,
    /// Rows dropped because a field was absent
    pub dropped_missing: usize,
    /// Rows dropped because the country was already seen
    pub duplicates: usize,
    /// Kept rows with zero cases (null rates)
    pub zero_case: usize,
    /// Absent-value count per raw field, in `Field::RAW` order
    pub missing: Vec<(Field, usize)>,
}

impl CleanReport {
    pub fn kept(&self) -> usize {
        self.scraped - self.dropped_missing - self.duplicates
    }

    pub fn missing_for(&self, field: Field) -> usize {
        self.missing.iter().find(|(f, _)| *f == field).map(|(_, n)| *n).unwrap_or(0)
    }
}

pub fn normalize(raw: Vec<RawRecord>) -> Result<(Snapshot, CleanReport)> {
    let mut report = CleanReport {
        scraped: raw.len(),
        missing: Field::RAW.iter().map(|f| (*f, 0)).collect(),
        ..CleanReport::default()
    };

    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for row in &raw {
        let Some(rec) = coerce(row, &mut report)? else {
            report.dropped_missing += 1;
            continue;
        };

        if !seen.insert(rec.country.clone()) {
            logd!("Clean: duplicate country {:?} dropped", rec.country);
            report.duplicates += 1;
            continue;
        }
        if rec.total_cases == 0 {
            report.zero_case += 1;
        }
        records.push(rec);
    }

    logf!(
        "Clean: scraped={} kept={} missing={} duplicates={} zero_case={}",
        report.scraped,
        records.len(),
        report.dropped_missing,
        report.duplicates,
        report.zero_case
    );

    Ok((Snapshot::new(records), report))
}

/// `Ok(None)` when any field is absent.
fn coerce(row: &RawRecord, report: &mut CleanReport) -> Result<Option<CountryRecord>> {
    let country = clean_name(&row.country);
    let counts: Vec<Option<String>> = Field::COUNTS
        .iter()
        .map(|f| strip_number(row.get(*f).unwrap_or_default()))
        .collect();

    let mut absent = false;
    if country.is_none() {
        bump(report, Field::Country);
        absent = true;
    }
    for (field, v) in Field::COUNTS.iter().zip(&counts) {
        if v.is_none() {
            bump(report, *field);
            absent = true;
        }
    }
    if absent {
        return Ok(None);
    }

    let country = country.unwrap_or_default();
    let mut parsed = [0u64; 5];
    for (i, (field, v)) in Field::COUNTS.iter().zip(&counts).enumerate() {
        let text = v.as_deref().unwrap_or_default();
        parsed[i] = text
            .parse::<u64>()
            .ok()
            .filter(|n| *n <= CountryRecord::MAX_COUNT)
            .ok_or_else(|| Error::Parse {
                country: country.clone(),
                field: field.key(),
                value: row.get(*field).unwrap_or_default().to_string(),
            })?;
    }

    let [cases, deaths, recovered, population, tests] = parsed;
    Ok(Some(CountryRecord::new(country, cases, deaths, recovered, population, tests)))
}

fn bump(report: &mut CleanReport, field: Field) {
    if let Some((_, n)) = report.missing.iter_mut().find(|(f, _)| *f == field) {
        *n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(country: &str, cases: &str, deaths: &str, recovered: &str) -> RawRecord {
        RawRecord {
            country: s!(country),
            total_cases: s!(cases),
            total_deaths: s!(deaths),
            total_recovered: s!(recovered),
            population: s!("1,000,000"),
            total_tests: s!("50,000"),
        }
    }

    #[test]
    fn separators_are_stripped() {
        let (snap, _) = normalize(vec![raw("USA", "1,234,567", "1,000", "2,000")]).unwrap();
        let usa = &snap.records[0];
        assert_eq!(usa.total_cases, 1_234_567);
        assert_eq!(usa.population, 1_000_000);
        assert_eq!(usa.active_cases, 1_234_567 - 3_000);
    }

    #[test]
    fn absent_fields_drop_the_row() {
        let rows = vec![
            raw("A", "10", "1", "2"),
            raw("B", "10", "", "2"),
            raw("C", "10", "1", "N/A"),
            raw("  ", "10", "1", "2"),
        ];
        let (snap, report) = normalize(rows).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(report.scraped, 4);
        assert_eq!(report.dropped_missing, 3);
        assert_eq!(report.kept(), 1);
        assert_eq!(report.missing_for(Field::TotalDeaths), 1);
        assert_eq!(report.missing_for(Field::TotalRecovered), 1);
        assert_eq!(report.missing_for(Field::Country), 1);
    }

    #[test]
    fn non_numeric_is_parse_error() {
        let err = normalize(vec![raw("A", "10", "1", "2"), raw("B", "ten", "1", "2")]).unwrap_err();
        match err {
            Error::Parse { country, field, value } => {
                assert_eq!(country, "B");
                assert_eq!(field, "total_cases");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(matches!(
            normalize(vec![raw("A", "-5", "1", "2")]),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn counts_past_i64_are_rejected() {
        let err = normalize(vec![raw(
            "Huge",
            "18,000,000,000,000,000,000",
            "9,000,000,000,000,000,000",
            "9,000,000,000,000,000,000",
        )])
        .unwrap_err();
        assert!(matches!(err, Error::Parse { field: "total_cases", .. }), "{err}");
    }

    #[test]
    fn nineteen_digit_counts_stay_exact() {
        let (snap, _) = normalize(vec![raw(
            "Big",
            "9,000,000,000,000,000,000",
            "9,000,000,000,000,000,000",
            "9,000,000,000,000,000,000",
        )])
        .unwrap();
        assert_eq!(snap.records[0].active_cases, -9_000_000_000_000_000_000);
    }

    #[test]
    fn duplicates_keep_first() {
        let (snap, report) =
            normalize(vec![raw("A", "10", "1", "2"), raw("A", "99", "9", "9")]).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.records[0].total_cases, 10);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn zero_cases_are_kept_and_counted() {
        let (snap, report) = normalize(vec![raw("Z", "0", "0", "0")]).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.records[0].recovery_rate, None);
        assert_eq!(report.zero_case, 1);
    }
}
