// src/analysis.rs
//! Summary statistics over a [`Snapshot`], shared by the CLI report and the
//! dashboard tabs. Null rates are skipped, never treated as zero.

use crate::record::{CountryRecord, Field, Snapshot};

/// Column summary. Statistics are `None` when the column has no values
/// (`std` also when it has only one).
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub field: Field,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

fn values(snap: &Snapshot, field: Field) -> Vec<f64> {
    snap.iter().filter_map(|r| r.value(field)).collect()
}

/// Linear-interpolation quantile of sorted data.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() { return None; }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

fn sorted(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

pub fn summarize(snap: &Snapshot, field: Field) -> Summary {
    let v = sorted(values(snap, field));
    let n = v.len();

    let mean = (n > 0).then(|| v.iter().sum::<f64>() / n as f64);
    let std = match (n, mean) {
        (2.., Some(m)) => {
            let ss: f64 = v.iter().map(|x| (x - m).powi(2)).sum();
            Some((ss / (n - 1) as f64).sqrt())
        }
        _ => None,
    };

    Summary {
        field,
        count: n,
        mean,
        std,
        min: v.first().copied(),
        q25: quantile(&v, 0.25),
        median: quantile(&v, 0.5),
        q75: quantile(&v, 0.75),
        max: v.last().copied(),
    }
}

/// One [`Summary`] per numeric column, in column order.
pub fn describe(snap: &Snapshot) -> Vec<Summary> {
    Field::ALL
        .iter()
        .filter(|f| f.is_numeric())
        .map(|f| summarize(snap, *f))
        .collect()
}

/// Pearson correlation over the rows where both columns have a value.
pub fn pearson(snap: &Snapshot, a: Field, b: Field) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = snap
        .iter()
        .filter_map(|r| Some((r.value(a)?, r.value(b)?)))
        .collect();
    if pairs.len() < 2 { return None; }

    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        sxy += (x - mx) * (y - my);
        sxx += (x - mx).powi(2);
        syy += (y - my).powi(2);
    }
    if sxx == 0.0 || syy == 0.0 { return None; }
    Some(sxy / (sxx.sqrt() * syy.sqrt()))
}

/// Correlation matrix, row-major over `fields`.
pub fn correlation(snap: &Snapshot, fields: &[Field]) -> Vec<Vec<Option<f64>>> {
    fields
        .iter()
        .map(|a| fields.iter().map(|b| pearson(snap, *a, *b)).collect())
        .collect()
}

/// `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]` of one column.
fn iqr_fence(snap: &Snapshot, field: Field) -> Option<(f64, f64)> {
    let v = sorted(values(snap, field));
    let q1 = quantile(&v, 0.25)?;
    let q3 = quantile(&v, 0.75)?;
    let iqr = q3 - q1;
    Some((q1 - 1.5 * iqr, q3 + 1.5 * iqr))
}

/// Records whose total cases and total recovered both sit inside their IQR fences.
pub fn without_outliers(snap: &Snapshot) -> Snapshot {
    let (Some(cases), Some(recovered)) = (
        iqr_fence(snap, Field::TotalCases),
        iqr_fence(snap, Field::TotalRecovered),
    ) else {
        return Snapshot::default();
    };

    let inside = |v: Option<f64>, (lo, hi): (f64, f64)| v.is_some_and(|v| v >= lo && v <= hi);
    Snapshot::new(
        snap.iter()
            .filter(|r| inside(r.value(Field::TotalCases), cases))
            .filter(|r| inside(r.value(Field::TotalRecovered), recovered))
            .cloned()
            .collect(),
    )
}

/// The `n` records with the most total cases, largest first. Ties keep source order.
pub fn top_by_cases(snap: &Snapshot, n: usize) -> Vec<&CountryRecord> {
    let mut v: Vec<&CountryRecord> = snap.iter().collect();
    v.sort_by(|a, b| b.total_cases.cmp(&a.total_cases));
    v.truncate(n);
    v
}

/// Records of the selected countries, in snapshot order. Unknown names are ignored.
pub fn compare<'a, S: AsRef<str>>(snap: &'a Snapshot, names: &[S]) -> Vec<&'a CountryRecord> {
    snap.iter()
        .filter(|r| names.iter().any(|n| n.as_ref() == r.country))
        .collect()
}
