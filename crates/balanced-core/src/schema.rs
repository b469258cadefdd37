//! Table schema registry.
//!
//! Static descriptions of the tables the ledger persists to. A
//! [`TableSchema`] is an ordered list of column definitions; the column
//! descriptors are raw SQLite column-definition fragments, so the registry
//! stays agnostic of what each table stores. Schemas are validated before
//! they reach the database and are immutable once a table exists.

use crate::error::{LedgerError, Result};

/// Name of the accounting entries table.
pub const ENTRIES_TABLE: &str = "entries";

/// Name of the user-defined tags table.
pub const TAGS_TABLE: &str = "tags";

/// Ordered description of one table: its name and `(column, descriptor)`
/// pairs in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    fields: Vec<(String, String)>,
}

impl TableSchema {
    /// Creates an empty schema for the named table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a column definition. Descriptors follow SQLite's
    /// column-definition grammar (`INTEGER PRIMARY KEY AUTOINCREMENT`,
    /// `REAL NOT NULL`, ...).
    pub fn field(mut self, column: impl Into<String>, descriptor: impl Into<String>) -> Self {
        self.fields.push((column.into(), descriptor.into()));
        self
    }

    /// The table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over `(column, descriptor)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(c, d)| (c.as_str(), d.as_str()))
    }

    /// Returns true if the schema declares the named column.
    pub fn has_column(&self, column: &str) -> bool {
        self.fields.iter().any(|(c, _)| c == column)
    }

    /// Validates the schema: identifier-safe table name, at least one
    /// column, unique identifier-safe column names.
    pub fn validate(&self) -> Result<()> {
        ensure_identifier(&self.name, "table")?;

        if self.fields.is_empty() {
            return Err(LedgerError::invalid_input(
                "fields",
                format!("table '{}' declares no columns", self.name),
            ));
        }

        for (i, (column, _)) in self.fields.iter().enumerate() {
            ensure_identifier(column, "column")?;
            if self.fields[..i].iter().any(|(c, _)| c == column) {
                return Err(LedgerError::invalid_input(
                    "column",
                    format!("duplicate column '{column}' in table '{}'", self.name),
                ));
            }
        }

        Ok(())
    }

    /// Renders the idempotent creation statement for this schema.
    pub(crate) fn create_sql(&self) -> String {
        let columns: Vec<String> = self
            .fields
            .iter()
            .map(|(column, descriptor)| format!("{column} {descriptor}"))
            .collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", ")
        )
    }
}

/// Schema of the accounting entries table.
///
/// Timestamps are stored as unix epoch milliseconds; `method`, `category`
/// and `cycle_unit` are small integer codes indexing the fixed label sets in
/// [`crate::models`]. `cycle_count`/`cycle_unit` are both present for
/// recurring entries and both absent otherwise, and `next_trigger_time` is
/// set only while an entry recurs.
pub fn entries_schema() -> TableSchema {
    TableSchema::new(ENTRIES_TABLE)
        .field("id", "INTEGER PRIMARY KEY AUTOINCREMENT")
        .field("amount", "REAL NOT NULL")
        .field("note", "TEXT")
        .field("method", "INTEGER NOT NULL")
        .field("category", "INTEGER NOT NULL")
        .field("tags", "TEXT")
        .field("cycle_count", "INTEGER")
        .field("cycle_unit", "INTEGER")
        .field("first_time", "INTEGER NOT NULL")
        .field("next_trigger_time", "INTEGER")
}

/// Schema of the user-defined tags table.
pub fn tags_schema() -> TableSchema {
    TableSchema::new(TAGS_TABLE)
        .field("id", "INTEGER PRIMARY KEY AUTOINCREMENT")
        .field("title", "TEXT NOT NULL")
}

/// Checks that a name is a plain SQL identifier before it is spliced into a
/// statement. Values never take this path; they are bound as parameters.
pub(crate) fn ensure_identifier(value: &str, field: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(LedgerError::invalid_input(
            field,
            format!("'{value}' is not a valid identifier"),
        ))
    }
}
