pub mod sqlite;

use crate::app::Result;
use crate::domain::Tld;

pub use sqlite::SqliteStore;

/// Outcome of an insert attempt. A duplicate is an expected, non-error
/// result: the entry was already recorded by a previous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Duplicate,
}

pub trait Store {
    fn insert(&self, tld: &Tld) -> Result<InsertOutcome>;
    fn contains(&self, tld: &Tld) -> Result<bool>;
    fn all(&self) -> Result<Vec<Tld>>;
}
