//! Error types for the ledger library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The store has been closed; the operation was refused without touching
    /// storage
    #[error("Store is closed")]
    StoreClosed,
    /// Update or delete issued without a filter condition
    #[error("{action} refused: condition cannot be null")]
    FilterRequired { action: String },
    /// Entry not found for the given ID
    #[error("Entry with ID {id} not found")]
    EntryNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl LedgerError {
    /// Creates a database error with a message and its rusqlite source.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        LedgerError::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a filter-required refusal for a mutating action.
    pub fn filter_required(action: impl Into<String>) -> Self {
        LedgerError::FilterRequired {
            action: action.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LedgerError::database(message, e))
    }
}

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;
