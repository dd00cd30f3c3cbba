// src/record.rs
//! Country records: the raw six-field rows the extractor produces and the
//! typed, enriched rows everything downstream consumes.
//!
//! `Field` is the single list of columns. Its `label` is what files and the
//! dashboard show; its `key` is the document-store field name.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Country,
    TotalCases,
    TotalDeaths,
    TotalRecovered,
    Population,
    TotalTests,
    ActiveCases,
    RecoveryRate,
    DeathRate,
}

use Field::*;

impl Field {
    /// Sourced from the page, in file order.
    pub const RAW: [Field; 6] = [Country, TotalCases, TotalDeaths, TotalRecovered, Population, TotalTests];

    /// The five numeric raw fields.
    pub const COUNTS: [Field; 5] = [TotalCases, TotalDeaths, TotalRecovered, Population, TotalTests];

    /// Raw fields + Active Cases: the seven-column layout.
    pub const BASE: [Field; 7] = [Country, TotalCases, TotalDeaths, TotalRecovered, Population, TotalTests, ActiveCases];

    /// Everything: the nine-column layout.
    pub const ALL: [Field; 9] = [
        Country, TotalCases, TotalDeaths, TotalRecovered, Population, TotalTests,
        ActiveCases, RecoveryRate, DeathRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Country => "Country",
            TotalCases => "Total Cases",
            TotalDeaths => "Total Deaths",
            TotalRecovered => "Total Recovered",
            Population => "Population",
            TotalTests => "Total Tests",
            ActiveCases => "Active Cases",
            RecoveryRate => "Recovery Rate",
            DeathRate => "Death Rate",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Country => "country",
            TotalCases => "total_cases",
            TotalDeaths => "total_deaths",
            TotalRecovered => "total_recovered",
            Population => "population",
            TotalTests => "total_tests",
            ActiveCases => "active_cases",
            RecoveryRate => "recovery_rate",
            DeathRate => "death_rate",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Country)
    }

    pub fn columns(include_rates: bool) -> &'static [Field] {
        if include_rates { &Self::ALL } else { &Self::BASE }
    }
}

/// One extracted row, still text (thousands separators and all).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub country: String,
    pub total_cases: String,
    pub total_deaths: String,
    pub total_recovered: String,
    pub population: String,
    pub total_tests: String,
}

impl RawRecord {
    /// Text of a raw field; derived fields have none.
    pub fn get(&self, field: Field) -> Option<&str> {
        let v = match field {
            Country => &self.country,
            TotalCases => &self.total_cases,
            TotalDeaths => &self.total_deaths,
            TotalRecovered => &self.total_recovered,
            Population => &self.population,
            TotalTests => &self.total_tests,
            ActiveCases | RecoveryRate | DeathRate => return None,
        };
        Some(v.as_str())
    }

    pub fn slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Country => Some(&mut self.country),
            TotalCases => Some(&mut self.total_cases),
            TotalDeaths => Some(&mut self.total_deaths),
            TotalRecovered => Some(&mut self.total_recovered),
            Population => Some(&mut self.population),
            TotalTests => Some(&mut self.total_tests),
            ActiveCases | RecoveryRate | DeathRate => None,
        }
    }
}

/// One country's statistics, raw and derived fields combined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub total_cases: u64,
    pub total_deaths: u64,
    pub total_recovered: u64,
    pub population: u64,
    pub total_tests: u64,
    pub active_cases: i64,
    /// `None` when `total_cases == 0`
    pub recovery_rate: Option<f64>,
    /// `None` when `total_cases == 0`
    pub death_rate: Option<f64>,
}

impl CountryRecord {
    /// Largest count the cleaner accepts, so Active Cases always fits an `i64`.
    pub const MAX_COUNT: u64 = i64::MAX as u64;

    /// Build from the raw counts; derived fields are computed here and nowhere else.
    pub fn new(
        country: impl Into<String>,
        total_cases: u64,
        total_deaths: u64,
        total_recovered: u64,
        population: u64,
        total_tests: u64,
    ) -> Self {
        // saturates only for counts above MAX_COUNT
        let active = total_cases as i128 - (total_deaths as i128 + total_recovered as i128);
        let active_cases = active.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
        let (recovery_rate, death_rate) = if total_cases == 0 {
            (None, None)
        } else {
            let cases = total_cases as f64;
            (
                Some(100.0 * total_recovered as f64 / cases),
                Some(100.0 * total_deaths as f64 / cases),
            )
        };
        Self {
            country: country.into(),
            total_cases,
            total_deaths,
            total_recovered,
            population,
            total_tests,
            active_cases,
            recovery_rate,
            death_rate,
        }
    }

    /// Numeric value of a column; `None` for Country and for null rates.
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Country => None,
            TotalCases => Some(self.total_cases as f64),
            TotalDeaths => Some(self.total_deaths as f64),
            TotalRecovered => Some(self.total_recovered as f64),
            Population => Some(self.population as f64),
            TotalTests => Some(self.total_tests as f64),
            ActiveCases => Some(self.active_cases as f64),
            RecoveryRate => self.recovery_rate,
            DeathRate => self.death_rate,
        }
    }

    /// Exact integer value of a count column; `None` for Country and the rates.
    pub fn integer(&self, field: Field) -> Option<i128> {
        match field {
            TotalCases => Some(self.total_cases as i128),
            TotalDeaths => Some(self.total_deaths as i128),
            TotalRecovered => Some(self.total_recovered as i128),
            Population => Some(self.population as i128),
            TotalTests => Some(self.total_tests as i128),
            ActiveCases => Some(self.active_cases as i128),
            Country | RecoveryRate | DeathRate => None,
        }
    }

    /// Cell text for delimited export. Null rates are empty cells.
    pub fn cell(&self, field: Field) -> String {
        match field {
            Country => self.country.clone(),
            TotalCases => self.total_cases.to_string(),
            TotalDeaths => self.total_deaths.to_string(),
            TotalRecovered => self.total_recovered.to_string(),
            Population => self.population.to_string(),
            TotalTests => self.total_tests.to_string(),
            ActiveCases => self.active_cases.to_string(),
            RecoveryRate => self.recovery_rate.map(|v| format!("{v:?}")).unwrap_or_default(),
            DeathRate => self.death_rate.map(|v| format!("{v:?}")).unwrap_or_default(),
        }
    }

    /// Cell text for on-screen tables: grouped integers, rates to two places.
    pub fn display(&self, field: Field) -> String {
        match field {
            Country => self.country.clone(),
            RecoveryRate | DeathRate => match self.value(field) {
                Some(v) => format!("{v:.2}"),
                None => s!("—"),
            },
            _ => self.integer(field).map(group_thousands_signed).unwrap_or_default(),
        }
    }
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

fn group_thousands_signed(n: i128) -> String {
    let grouped = group_thousands(n.unsigned_abs());
    if n < 0 { join!("-", &grouped) } else { grouped }
}

/// The records of one pipeline run, in source order. Country names are unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub records: Vec<CountryRecord>,
}

impl Snapshot {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> { self.records.iter() }

    pub fn get(&self, country: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.country == country)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.country.as_str())
    }

    pub fn headers(include_rates: bool) -> Vec<String> {
        Field::columns(include_rates).iter().map(|f| s!(f.label())).collect()
    }

    /// Rows of export cells in the seven- or nine-column layout.
    pub fn rows(&self, include_rates: bool) -> Vec<Vec<String>> {
        let cols = Field::columns(include_rates);
        self.records
            .iter()
            .map(|r| cols.iter().map(|f| r.cell(*f)).collect())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}
