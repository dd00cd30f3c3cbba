// tests/store_upload.rs
//
// Document store sink without a server.

use covid_impact::config::options::StoreOptions;
use covid_impact::error::{Error, Result};
use covid_impact::record::{CountryRecord, Snapshot};
use covid_impact::store::{upload, DocumentStore, MongoStore};

#[derive(Default)]
struct MemoryStore {
    docs: Vec<serde_json::Value>,
}

impl DocumentStore for MemoryStore {
    fn insert_many(&mut self, records: &[CountryRecord]) -> Result<usize> {
        for r in records {
            self.docs.push(serde_json::to_value(r).map_err(|e| Error::Store(e.to_string()))?);
        }
        Ok(records.len())
    }
}

struct DownStore;

impl DocumentStore for DownStore {
    fn insert_many(&mut self, _: &[CountryRecord]) -> Result<usize> {
        Err(Error::Store(s("server selection timeout")))
    }
}

fn s(v: &str) -> String { v.to_string() }

fn snap() -> Snapshot {
    Snapshot::new(vec![
        CountryRecord::new("A", 1000, 10, 900, 5_000, 20_000),
        CountryRecord::new("C", 0, 0, 0, 100, 0),
    ])
}

#[test]
fn one_document_per_record_with_snake_case_keys() {
    let mut store = MemoryStore::default();
    assert_eq!(upload(&mut store, &snap()).unwrap(), 2);

    let a = &store.docs[0];
    for key in [
        "country", "total_cases", "total_deaths", "total_recovered", "population",
        "total_tests", "active_cases", "recovery_rate", "death_rate",
    ] {
        assert!(a.get(key).is_some(), "missing {key}");
    }
    assert_eq!(a["country"], "A");
    assert_eq!(a["active_cases"], 90);

    // zero-case rates are stored as null
    assert!(store.docs[1]["recovery_rate"].is_null());
    assert!(store.docs[1]["death_rate"].is_null());
}

#[test]
fn empty_snapshot_inserts_nothing() {
    let mut store = DownStore;
    assert_eq!(upload(&mut store, &Snapshot::default()).unwrap(), 0);
}

#[test]
fn store_failure_is_a_store_error() {
    let err = upload(&mut DownStore, &snap()).unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert!(!err.is_pipeline());
}

#[test]
fn bad_uri_is_reported_not_panicked() {
    let opts = StoreOptions { uri: s("not-a-mongo-uri"), ..StoreOptions::default() };
    assert!(matches!(MongoStore::connect(&opts), Err(Error::Store(_))));
}

#[test]
fn defaults_point_at_the_local_server() {
    let opts = StoreOptions::default();
    assert!(opts.uri.starts_with("mongodb://localhost:27017/"));
    assert_eq!(opts.database, "final_project_db");
    assert_eq!(opts.collection, "covid_cleaned_data");
}
