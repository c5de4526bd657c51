//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use crate::{Error, Result};
use crate::snippet::{PutOutcome, PutReceipt, Snippet};
use super::schema;

/// Text handed back by [`SqliteStore::get_or_sentinel`] when a keyword is unknown
pub const NOT_FOUND: &str = "404: Snippet Not Found";

/// SQLite-backed snippet storage.
///
/// Owns a single connection for its whole lifetime. Every operation borrows
/// a statement (or, for writes, a transaction) from it; both are released
/// on drop, so an early `?` return never leaves a statement open or a
/// transaction pending.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening snippet database at {}", path.display());
        let conn = Connection::open(path).map_err(Error::open(path))?;
        Self::with_connection(conn).map_err(Error::open(path))
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let path = Path::new(":memory:");
        let conn = Connection::open_in_memory().map_err(Error::open(path))?;
        Self::with_connection(conn).map_err(Error::open(path))
    }

    fn with_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> rusqlite::Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Store `message` under `keyword` unless the keyword is already taken.
    ///
    /// A taken keyword is not an error: the attempted row is rolled back,
    /// the existing one is kept, and the receipt reports
    /// [`PutOutcome::Conflict`]. Any other failure is returned as
    /// [`Error::Operation`].
    pub fn put(&mut self, keyword: &str, message: &str) -> Result<PutReceipt> {
        tracing::debug!("put({:?}, {:?})", keyword, message);
        let tx = self.conn.transaction().map_err(Error::operation("put"))?;

        let inserted = tx.execute(
            "INSERT INTO snippets (keyword, message) VALUES (?1, ?2)",
            params![keyword, message],
        );

        let outcome = match inserted {
            Ok(_) => {
                tx.commit().map_err(Error::operation("put"))?;
                tracing::debug!("Stored snippet {:?}", keyword);
                PutOutcome::Inserted
            }
            Err(e) if is_keyword_conflict(&e) => {
                tx.rollback().map_err(Error::operation("put"))?;
                tracing::info!("Snippet {:?} already exists, keeping the stored message", keyword);
                PutOutcome::Conflict
            }
            Err(e) => return Err(Error::operation("put")(e)),
        };

        Ok(PutReceipt {
            snippet: Snippet::new(keyword, message),
            outcome,
        })
    }

    /// Get the message stored under exactly `keyword`
    pub fn get(&self, keyword: &str) -> Result<Option<String>> {
        tracing::debug!("get({:?})", keyword);
        self.conn
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                [keyword],
                |row| row.get(0),
            )
            .optional()
            .map_err(Error::operation("get"))
    }

    /// Get the message, or [`NOT_FOUND`] when the keyword is unknown
    pub fn get_or_sentinel(&self, keyword: &str) -> Result<String> {
        Ok(self.get(keyword)?.unwrap_or_else(|| NOT_FOUND.to_string()))
    }

    /// All stored keywords, in whatever order the backend yields them
    pub fn catalog(&self) -> Result<Vec<String>> {
        tracing::debug!("catalog()");
        let mut stmt = self
            .conn
            .prepare_cached("SELECT keyword FROM snippets")
            .map_err(Error::operation("catalog"))?;

        let keywords = stmt
            .query_map([], |row| row.get(0))
            .map_err(Error::operation("catalog"))?
            .collect::<rusqlite::Result<Vec<String>>>()
            .map_err(Error::operation("catalog"))?;

        Ok(keywords)
    }

    /// Snippets whose message contains `fragment`.
    ///
    /// Matching uses LIKE, so `%` and `_` in the fragment are wildcards.
    pub fn search(&self, fragment: &str) -> Result<Vec<Snippet>> {
        tracing::debug!("search({:?})", fragment);
        let pattern = format!("%{}%", fragment);

        let mut stmt = self
            .conn
            .prepare_cached("SELECT keyword, message FROM snippets WHERE message LIKE ?1")
            .map_err(Error::operation("search"))?;

        let snippets = stmt
            .query_map([pattern], |row| {
                Ok(Snippet {
                    keyword: row.get(0)?,
                    message: row.get(1)?,
                })
            })
            .map_err(Error::operation("search"))?
            .collect::<rusqlite::Result<Vec<Snippet>>>()
            .map_err(Error::operation("search"))?;

        Ok(snippets)
    }

    /// Close the connection, reporting anything SQLite refuses to flush
    pub fn close(self) -> Result<()> {
        tracing::debug!("Closing snippet database");
        self.conn
            .close()
            .map_err(|(_, e)| Error::operation("close")(e))
    }
}

/// True when an insert was rejected because the keyword already exists
fn is_keyword_conflict(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && (e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
        }
        _ => false,
    }
}
