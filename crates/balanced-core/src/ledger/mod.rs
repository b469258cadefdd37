//! High-level async ledger API.
//!
//! The [`Ledger`] is the async front of the record store: it owns one
//! [`Database`] handle and exposes every storage operation as an `async
//! fn` that runs the blocking rusqlite call on a worker thread.
//!
//! # Concurrency model
//!
//! One instance mutex serializes terminal operations, so concurrent
//! callers on the same ledger queue up instead of interleaving on the
//! connection. Queries themselves are immutable [`crate::db::Query`]
//! values, so there is no per-instance query state to corrupt either way.
//! An operation that has started always runs to completion; there is no
//! cancellation. After [`Ledger::close`] the handle is gone and every
//! operation fails fast with [`LedgerError::StoreClosed`] instead of
//! hanging.
//!
//! Multiple ledgers may point at the same database file; coordinating
//! those writers is left to SQLite's own locking.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task;

use crate::db::Database;
use crate::error::{LedgerError, Result};

pub mod builder;
pub mod entry_ops;
pub mod store_ops;
pub mod tag_ops;

#[cfg(test)]
mod tests;

pub use builder::LedgerBuilder;

/// Async interface to one record store instance.
#[derive(Clone)]
pub struct Ledger {
    db: Arc<Mutex<Option<Database>>>,
}

impl Ledger {
    /// Wraps an opened database handle.
    pub(crate) fn new(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(Some(db))),
        }
    }

    /// Runs a storage closure on a blocking task while holding the
    /// instance lock.
    pub(crate) async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let guard = Arc::clone(&self.db).lock_owned().await;

        task::spawn_blocking(move || {
            let mut guard = guard;
            let db = guard.as_mut().ok_or(LedgerError::StoreClosed)?;
            f(db)
        })
        .await
        .map_err(|e| LedgerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Closes the store. In-flight operations hold the lock and finish
    /// first; operations issued afterwards fail fast with
    /// [`LedgerError::StoreClosed`], as does a second close.
    pub async fn close(&self) -> Result<()> {
        let mut guard = Arc::clone(&self.db).lock_owned().await;
        let db = guard.take().ok_or(LedgerError::StoreClosed)?;

        task::spawn_blocking(move || {
            let _guard = guard;
            db.close()
        })
        .await
        .map_err(|e| LedgerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
