//! Builder for creating and configuring Ledger instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Ledger;
use crate::{
    db::Database,
    error::{LedgerError, Result},
};

/// Builder for creating and configuring Ledger instances.
#[derive(Debug, Clone)]
pub struct LedgerBuilder {
    database_path: Option<PathBuf>,
}

impl LedgerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/balanced/balanced.db` or
    /// `~/.local/share/balanced/balanced.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the database and builds the ledger. Once this returns, the
    /// store is ready: the handle is open and the registry tables exist.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::FileSystem` if the database path is invalid
    /// Returns `LedgerError::Database` if opening or initialization fails
    pub async fn build(self) -> Result<Ledger> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LedgerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db = task::spawn_blocking(move || Database::open(&db_path))
            .await
            .map_err(|e| LedgerError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Ledger::new(db))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("balanced")
            .place_data_file("balanced.db")
            .map_err(|e| LedgerError::XdgDirectory(e.to_string()))
    }
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
