// tests/common/mod.rs
//
// A page shaped like the live source: one decoy table, then the country
// table with a header row, 8 summary rows, the countries, and 8 footer rows.
#![allow(dead_code)]

pub const SUMMARY_ROWS: usize = 8;

/// (country, total cases, total deaths, total recovered, total tests, population)
pub type Fixture<'a> = (&'a str, &'a str, &'a str, &'a str, &'a str, &'a str);

pub fn country_row((country, cases, deaths, recovered, tests, population): Fixture<'_>) -> String {
    let link = format!(r#"<a class="mt_a" href="country/{}/">{}</a>"#, country.to_lowercase(), country);
    let cells: [&str; 19] = [
        "7",
        &link,
        cases,
        "+1,024",
        deaths,
        "+3",
        recovered,
        "+900",
        "12,345",
        "67",
        "1,550",
        "12",
        tests,
        "98,765",
        population,
        "Europe",
        "1",
        "2",
        "3",
    ];
    let tds: String = cells
        .iter()
        .map(|c| format!("<td style=\"font-weight: bold; text-align:right\">{c} </td>"))
        .collect();
    format!("<tr style=\"\">\n{tds}\n</tr>\n")
}

fn summary_row(label: &str) -> String {
    let mut tds = format!("<td></td><td><nobr>{label}</nobr></td>");
    for _ in 2..19 {
        tds.push_str("<td>999,999</td>");
    }
    format!("<tr class=\"total_row_world\">{tds}</tr>\n")
}

pub fn page(countries: &[Fixture<'_>]) -> String {
    let head: String = (0..SUMMARY_ROWS).map(|i| summary_row(&format!("Continent {i}"))).collect();
    let foot: String = (0..SUMMARY_ROWS).map(|i| summary_row(&format!("Total {i}:"))).collect();
    let body: String = countries.iter().map(|c| country_row(*c)).collect();

    format!(
        r#"<!DOCTYPE html><html><head><title>COVID</title></head><body>
<table id="main_table_countries_yesterday"><tr><td>stale</td></tr></table>
<TABLE id="main_table_countries_today" class="table table-bordered">
<thead><tr><th>#</th><th>Country,<br>Other</th><th>Total<br>Cases</th></tr></thead>
<tbody>
{head}{body}</tbody>
<tbody class="total_row_body body_world">
{foot}</tbody>
</TABLE>
</body></html>"#
    )
}

/// The three reference rows: plain, nobody recovered, no cases at all.
pub fn abc() -> Vec<Fixture<'static>> {
    vec![
        ("A", "1,000", "10", "900", "20,000", "5,000"),
        ("B", "500", "5", "0", "1,000", "8,000"),
        ("C", "0", "0", "0", "0", "100"),
    ]
}
