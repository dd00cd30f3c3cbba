// src/store.rs
//
// Document store sink. One document per record, keys are the snake_case
// field names, null rates stay null. Only ever run on explicit request.

use mongodb::sync::{Client, Collection};

use crate::config::options::StoreOptions;
use crate::error::Result;
use crate::record::{CountryRecord, Snapshot};

/// Somewhere records can be inserted as documents.
pub trait DocumentStore {
    /// Insert all records; returns how many were stored.
    fn insert_many(&mut self, records: &[CountryRecord]) -> Result<usize>;
}

pub struct MongoStore {
    collection: Collection<CountryRecord>,
}

impl MongoStore {
    /// Parse the URI and pick the collection. No round-trip happens until
    /// the first insert, which is where an unreachable server shows up.
    pub fn connect(opts: &StoreOptions) -> Result<Self> {
        let client = Client::with_uri_str(&opts.uri)?;
        let collection = client.database(&opts.database).collection(&opts.collection);
        Ok(Self { collection })
    }
}

impl DocumentStore for MongoStore {
    fn insert_many(&mut self, records: &[CountryRecord]) -> Result<usize> {
        let res = self.collection.insert_many(records, None)?;
        Ok(res.inserted_ids.len())
    }
}

/// Push a snapshot into a store. An empty snapshot is a no-op.
pub fn upload(store: &mut dyn DocumentStore, snap: &Snapshot) -> Result<usize> {
    if snap.is_empty() {
        logf!("Store: nothing to insert");
        return Ok(0);
    }
    let n = store.insert_many(&snap.records)?;
    logf!("Store: inserted {} documents", n);
    Ok(n)
}

/// Connect with `opts` and upload.
pub fn store_snapshot(opts: &StoreOptions, snap: &Snapshot) -> Result<usize> {
    MongoStore::connect(opts)
        .and_then(|mut store| upload(&mut store, snap))
        .inspect_err(|e| loge!("Store: {e}"))
}
