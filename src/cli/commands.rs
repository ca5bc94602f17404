use std::io::Write;

use tracing::{debug, error};

use crate::app::{AppContext, Result, TldwatchError};
use crate::reporter;
use crate::store::{InsertOutcome, Store};

/// Runs the whole pipeline once: fetch, parse, persist, report.
///
/// The store is opened only after the fetch has succeeded, so an aborted
/// fetch leaves the filesystem untouched even on a first run. Inserts run
/// sequentially against the single connection; each failed entry is
/// logged and skipped without aborting the batch, and earlier successful
/// inserts stay committed. Only entries that were actually inserted this
/// run make it into the report.
pub async fn run<W: Write>(ctx: &AppContext, out: W) -> Result<()> {
    let body = ctx.fetcher.fetch().await?;

    let tlds = ctx.normalizer.parse(&body);
    debug!(count = tlds.len(), "parsed tld list");

    let store = ctx.open_store()?;

    let mut new_tlds = Vec::with_capacity(tlds.len());
    for tld in tlds {
        match store.insert(&tld) {
            Ok(InsertOutcome::Inserted) => new_tlds.push(tld),
            // Already known from a previous run.
            Ok(InsertOutcome::Duplicate) => {}
            Err(e @ TldwatchError::Prepare(_)) => return Err(e),
            Err(e) => {
                error!(tld = %tld, error = %e, "failed to insert tld");
            }
        }
    }

    debug!(count = new_tlds.len(), "new tlds this run");
    reporter::write_report(&new_tlds, out)
}
