//! Entry repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the write path (validated, transactional put-and-index) and
//!   the read paths (exact lookup, prefix suggestion) over canonical
//!   `entries` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Entry::validate()` and derive the prefix before
//!   SQL mutations; a failed derivation leaves both tables untouched.
//! - `entries` and `entry_prefixes` rows for one entry are committed
//!   together or not at all.

use crate::db::DbError;
use crate::model::entry::{Entry, EntryValidationError};
use crate::model::prefix::{derive_prefix, PrefixError};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Prefix(PrefixError),
    /// An entry with the same name (case-insensitively) already exists.
    Duplicate(String),
    /// No entry matches the requested name.
    NotFound(String),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Prefix(err) => write!(f, "{err}"),
            Self::Duplicate(name) => write!(f, "entry already exists: {name}"),
            Self::NotFound(name) => write!(f, "entry not found: {name}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Prefix(err) => Some(err),
            Self::Duplicate(_) => None,
            Self::NotFound(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PrefixError> for RepoError {
    fn from(value: PrefixError) -> Self {
        Self::Prefix(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for entry storage and suggestion queries.
pub trait EntryRepository {
    /// Inserts a new entry together with its prefix index row.
    fn insert_entry(&self, entry: &Entry) -> RepoResult<()>;

    /// Returns the symbols stored under `name` (case-insensitive exact
    /// match).
    ///
    /// The uniqueness constraint means at most one element today; the
    /// sequence return type accommodates a future relaxation, and callers
    /// must merge multi-element results.
    fn symbols_by_name(&self, name: &str) -> RepoResult<Vec<String>>;

    /// Returns entry names whose index prefix matches `prefix`
    /// (case-insensitive), in store insertion order.
    fn names_with_prefix(&self, prefix: &str) -> RepoResult<Vec<String>>;

    /// Returns the number of stored entries.
    fn count_entries(&self) -> RepoResult<u64>;
}

/// SQLite-backed entry repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn insert_entry(&self, entry: &Entry) -> RepoResult<()> {
        entry.validate()?;
        let prefix = derive_prefix(&entry.name)?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO entries (name, symbol) VALUES (?1, ?2);",
            params![entry.name.as_str(), entry.symbol.as_str()],
        )
        .map_err(|err| map_insert_error(err, &entry.name))?;
        tx.execute(
            "INSERT INTO entry_prefixes (prefix, entry_name) VALUES (?1, ?2);",
            params![prefix.as_str(), entry.name.as_str()],
        )?;
        tx.commit()?;

        Ok(())
    }

    fn symbols_by_name(&self, name: &str) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT symbol FROM entries
             WHERE name = ?1
             ORDER BY id;",
        )?;
        let mut rows = stmt.query([name])?;
        let mut symbols = Vec::new();

        while let Some(row) = rows.next()? {
            symbols.push(row.get::<_, String>(0)?);
        }

        if symbols.is_empty() {
            return Err(RepoError::NotFound(name.to_string()));
        }

        Ok(symbols)
    }

    fn names_with_prefix(&self, prefix: &str) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT entry_name FROM entry_prefixes
             WHERE prefix = ?1
             ORDER BY rowid;",
        )?;
        let mut rows = stmt.query([prefix])?;
        let mut names = Vec::new();

        while let Some(row) = rows.next()? {
            names.push(row.get::<_, String>(0)?);
        }

        Ok(names)
    }

    fn count_entries(&self) -> RepoResult<u64> {
        let count =
            self.conn
                .query_row("SELECT COUNT(*) FROM entries;", [], |row| {
                    row.get::<_, i64>(0)
                })?;
        Ok(count as u64)
    }
}

fn map_insert_error(err: rusqlite::Error, name: &str) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE {
            return RepoError::Duplicate(name.to_string());
        }
    }
    err.into()
}
