//! Record store over a single local SQLite database.
//!
//! This module provides the storage layer of the ledger: one
//! [`Database`] owning one rusqlite connection, a generic record surface
//! (create/drop table, insert/select/update/delete driven by [`Query`]
//! specifications) and the typed entry/tag queries built on top of it.
//! Every terminal operation returns a definite [`crate::error::Result`];
//! storage faults never escape as panics.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, LedgerError, Result};
use crate::schema;

pub mod entry_queries;
pub mod query;
pub mod record_ops;
pub mod table_ops;
pub mod tag_queries;

pub use query::Query;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and ensures the
    /// registry tables exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_registry()?;
        Ok(db)
    }

    /// Creates the tables of the schema registry. Idempotent.
    fn initialize_registry(&self) -> Result<()> {
        self.create_table(&schema::entries_schema())?;
        self.create_table(&schema::tags_schema())?;
        Ok(())
    }

    /// Closes the connection. The handle is consumed; the async facade
    /// fails fast on any operation issued afterwards.
    pub fn close(self) -> Result<()> {
        report(
            "close",
            self.connection
                .close()
                .map_err(|(_, e)| LedgerError::database("Failed to close database connection", e)),
        )
    }
}

/// Funnels a terminal operation's outcome through the logging channel and
/// hands it back unchanged.
pub(crate) fn report<T>(action: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => log::debug!("{action} succeeded"),
        Err(e) => log::error!("{action} failed: {e}"),
    }
    result
}
