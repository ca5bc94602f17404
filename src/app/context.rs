use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;
use crate::store::SqliteStore;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
    store: StoreHandle,
}

/// Where the run's store comes from. On-disk stores are opened lazily:
/// a failed fetch must leave no database file behind, so first-run file
/// creation cannot happen at context construction.
enum StoreHandle {
    Deferred(PathBuf),
    Open(Arc<SqliteStore>),
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_fetcher(config, Arc::new(HttpFetcher::new()?)))
    }

    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
            store: StoreHandle::Deferred(config.db_path.clone()),
        }
    }

    /// Context backed by an already-open in-memory store, for tests.
    pub fn in_memory(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        Ok(Self {
            fetcher,
            normalizer: Normalizer::new(),
            store: StoreHandle::Open(Arc::new(SqliteStore::in_memory()?)),
        })
    }

    /// Opens the store, creating the backing file and schema on first
    /// run. Callers invoke this only once the fetch has succeeded.
    pub fn open_store(&self) -> Result<Arc<SqliteStore>> {
        match &self.store {
            StoreHandle::Deferred(path) => Ok(Arc::new(SqliteStore::open(path)?)),
            StoreHandle::Open(store) => Ok(store.clone()),
        }
    }
}
