use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection};
use rusqlite_migration::{Migrations, M};
use tracing::info;

use crate::app::{Result, TldwatchError};
use crate::domain::Tld;
use crate::store::{InsertOutcome, Store};

const INSERT_SQL: &str = "INSERT INTO tlds (tld) VALUES (?1)";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens or creates the backing database at `path`. The schema is
    /// created only on first run, detected by the file being absent
    /// before the open.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let first_run = !path.as_ref().exists();

        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };

        if first_run {
            store.run_migrations()?;
            info!("successfully initialized database");
        }

        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    /// The migration framework wraps the DDL in a transaction, so the
    /// schema either exists in full or not at all.
    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.conn()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|e| TldwatchError::SchemaInit(e.to_string()))?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            TldwatchError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }
}

impl Store for SqliteStore {
    fn insert(&self, tld: &Tld) -> Result<InsertOutcome> {
        let conn = self.conn()?;

        // Prepared once per connection, reused for every entry in the batch.
        let mut stmt = conn
            .prepare_cached(INSERT_SQL)
            .map_err(TldwatchError::Prepare)?;

        match stmt.execute(params![tld.as_str()]) {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                Ok(InsertOutcome::Duplicate)
            }
            Err(e) => Err(TldwatchError::Database(e)),
        }
    }

    fn contains(&self, tld: &Tld) -> Result<bool> {
        let conn = self.conn()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM tlds WHERE tld = ?1",
            params![tld.as_str()],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn all(&self) -> Result<Vec<Tld>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare("SELECT tld FROM tlds ORDER BY tld")?;
        let tlds = stmt
            .query_map([], |row| row.get::<_, String>(0).map(Tld::new))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tlds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_roundtrip() {
        let store = SqliteStore::in_memory().unwrap();
        let tld = Tld::from("com");

        assert_eq!(store.insert(&tld).unwrap(), InsertOutcome::Inserted);
        assert!(store.contains(&tld).unwrap());
        assert_eq!(store.all().unwrap(), vec![tld]);
    }

    #[test]
    fn test_duplicate_insert_is_not_an_error() {
        let store = SqliteStore::in_memory().unwrap();
        let tld = Tld::from("com");

        assert_eq!(store.insert(&tld).unwrap(), InsertOutcome::Inserted);
        assert_eq!(store.insert(&tld).unwrap(), InsertOutcome::Duplicate);
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn test_stores_unicode_labels_verbatim() {
        let store = SqliteStore::in_memory().unwrap();
        let tld = Tld::from("рф");

        store.insert(&tld).unwrap();
        assert_eq!(store.all().unwrap(), vec![Tld::from("рф")]);
    }

    #[test]
    fn test_schema_created_on_first_run_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert(&Tld::from("com")).unwrap();
        }

        // Second open must not re-run the migration and must see the
        // previously stored entry.
        let store = SqliteStore::open(&path).unwrap();
        assert!(store.contains(&Tld::from("com")).unwrap());
        assert_eq!(
            store.insert(&Tld::from("com")).unwrap(),
            InsertOutcome::Duplicate
        );
    }
}
