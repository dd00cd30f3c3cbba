// src/gui/actions/store.rs
use crate::{config::options::StoreOptions, error::Result, gui::app::App, store::store_snapshot};

/// Explicit "Store in MongoDB". Failures land in `store_message`; the
/// results on screen and the files on disk are left alone.
pub fn store(app: &mut App) {
    let Some(snap) = app.snapshot() else {
        app.store_message = Some(Err(s!("Nothing to store yet")));
        return;
    };

    let opts = &app.state.options.store;
    logf!("Store: Begin uri={} rows={}", opts.uri, snap.len());
    let outcome = store_outcome(store_snapshot(opts, snap), opts);
    app.store_message = Some(outcome);
}

/// Line shown under the export bar.
fn store_outcome(res: Result<usize>, opts: &StoreOptions) -> std::result::Result<String, String> {
    match res {
        Ok(n) => Ok(format!("Stored {n} documents in {}.{}", opts.database, opts.collection)),
        Err(e) => Err(format!("MongoDB upload failed: {e}")),
    }
}
