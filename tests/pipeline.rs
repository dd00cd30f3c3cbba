// tests/pipeline.rs
//
// Extract + clean against a synthetic page.

mod common;

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use covid_impact::config::options::FetchOptions;
use covid_impact::error::Error;
use covid_impact::progress::{NullProgress, Progress, Stage};
use covid_impact::record::Field;
use covid_impact::scrape::{collect_snapshot, from_html};

fn close(a: Option<f64>, b: f64) -> bool {
    a.is_some_and(|a| (a - b).abs() < 1e-9)
}

#[test]
fn reference_rows_derive_as_expected() {
    let doc = common::page(&common::abc());
    let out = from_html(&doc, &FetchOptions::default(), &mut NullProgress).unwrap();
    let snap = out.snapshot;
    assert_eq!(snap.len(), 3);

    let a = snap.get("A").unwrap();
    assert_eq!(a.active_cases, 90);
    assert!(close(a.recovery_rate, 90.0));
    assert!(close(a.death_rate, 1.0));
    assert_eq!(a.total_tests, 20_000);
    assert_eq!(a.population, 5_000);

    let b = snap.get("B").unwrap();
    assert_eq!(b.active_cases, 495);
    assert!(close(b.recovery_rate, 0.0));
    assert!(close(b.death_rate, 1.0));

    let c = snap.get("C").unwrap();
    assert_eq!(c.active_cases, 0);
    assert_eq!(c.recovery_rate, None);
    assert_eq!(c.death_rate, None);
    assert_eq!(out.report.zero_case, 1);
}

#[test]
fn summary_rows_are_skipped() {
    let countries: Vec<String> = (0..5).map(|i| format!("Country {i}")).collect();
    let rows: Vec<common::Fixture> = countries
        .iter()
        .map(|c| (c.as_str(), "1,234,567", "1", "2", "3", "4"))
        .collect();
    let doc = common::page(&rows);

    // header + (5 + 16) data rows → 5 records
    let out = from_html(&doc, &FetchOptions::default(), &mut NullProgress).unwrap();
    assert_eq!(out.snapshot.len(), 5);
    assert_eq!(out.report.scraped, 5);
    assert!(out.snapshot.countries().all(|c| c.starts_with("Country")));
    assert!(out.snapshot.iter().all(|r| r.total_cases == 1_234_567));
}

#[test]
fn only_summary_rows_gives_empty_snapshot() {
    let doc = common::page(&[]);
    let out = from_html(&doc, &FetchOptions::default(), &mut NullProgress).unwrap();
    assert!(out.snapshot.is_empty());
}

#[test]
fn rows_with_missing_values_are_dropped() {
    let doc = common::page(&[
        ("A", "1,000", "10", "900", "20,000", "5,000"),
        ("NoRecovered", "1,000", "10", "", "20,000", "5,000"),
        ("NoTests", "1,000", "10", "900", "N/A", "5,000"),
        ("B", "500", "5", "0", "1,000", "8,000"),
    ]);
    let out = from_html(&doc, &FetchOptions::default(), &mut NullProgress).unwrap();
    assert_eq!(out.snapshot.countries().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(out.report.dropped_missing, 2);
    assert_eq!(out.report.missing_for(Field::TotalRecovered), 1);
    assert_eq!(out.report.missing_for(Field::TotalTests), 1);
}

#[test]
fn non_numeric_cell_fails_the_run() {
    let doc = common::page(&[("A", "lots", "10", "900", "20,000", "5,000")]);
    let err = from_html(&doc, &FetchOptions::default(), &mut NullProgress).unwrap_err();
    assert!(matches!(err, Error::Parse { field: "total_cases", .. }), "{err}");
    assert!(err.is_pipeline());
}

#[test]
fn missing_table_is_a_layout_error() {
    let doc = common::page(&common::abc()).replace("main_table_countries_today", "renamed");
    let err = from_html(&doc, &FetchOptions::default(), &mut NullProgress).unwrap_err();
    assert!(matches!(err, Error::Layout(_)));
}

#[test]
fn stages_are_reported() {
    #[derive(Default)]
    struct Recorder(Vec<Stage>);
    impl Progress for Recorder {
        fn stage_done(&mut self, stage: Stage) { self.0.push(stage); }
    }

    let mut rec = Recorder::default();
    from_html(&common::page(&common::abc()), &FetchOptions::default(), &mut rec).unwrap();
    assert_eq!(rec.0, vec![Stage::Extract, Stage::Clean]);
}

/// Answer exactly one request on a local port with `status` and `body`.
fn serve_once(status: &'static str, body: String) -> FetchOptions {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            match conn.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => req.extend_from_slice(&buf[..n]),
            }
        }
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = conn.write_all(head.as_bytes());
        let _ = conn.write_all(body.as_bytes());
    });

    let mut opts = FetchOptions::default();
    opts.url = format!("http://{addr}/coronavirus/");
    opts
}

#[test]
fn fetched_page_runs_through_every_stage() {
    #[derive(Default)]
    struct Recorder(Vec<Stage>);
    impl Progress for Recorder {
        fn stage_done(&mut self, stage: Stage) { self.0.push(stage); }
    }

    let opts = serve_once("200 OK", common::page(&common::abc()));
    let mut rec = Recorder::default();
    let out = collect_snapshot(&opts, &mut rec).unwrap();
    assert_eq!(out.snapshot.countries().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(rec.0, vec![Stage::Fetch, Stage::Extract, Stage::Clean]);
}

#[test]
fn http_error_status_is_a_connection_error() {
    let opts = serve_once("404 Not Found", "gone".to_string());
    let err = collect_snapshot(&opts, &mut NullProgress).unwrap_err();
    assert!(matches!(&err, Error::Connection { reason, .. } if reason.contains("404")), "{err}");
    assert!(err.is_pipeline());
}

#[test]
fn unreachable_host_is_a_connection_error() {
    let mut opts = FetchOptions::default();
    opts.url = "http://127.0.0.1:1/".into();
    let err = collect_snapshot(&opts, &mut NullProgress).unwrap_err();
    assert!(matches!(&err, Error::Connection { url, .. } if url == "http://127.0.0.1:1/"), "{err}");
    assert!(err.is_pipeline());
}
