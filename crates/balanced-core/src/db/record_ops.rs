//! Generic record CRUD driven by query specifications.
//!
//! Values always travel through rusqlite parameter binding; only
//! identifier-checked table and column names and the caller's raw filter
//! fragments are spliced into statements.

use rusqlite::{params_from_iter, types::Value};

use super::Query;
use crate::error::{DatabaseResultExt, LedgerError, Result};
use crate::models::Record;
use crate::schema::ensure_identifier;

impl super::Database {
    /// Inserts one record into the query's table and returns the assigned
    /// row id. The query's projection and filter parts are ignored.
    pub fn insert(&self, query: &Query, record: &Record) -> Result<i64> {
        super::report("insert", self.insert_inner(query, record))
    }

    fn insert_inner(&self, query: &Query, record: &Record) -> Result<i64> {
        ensure_identifier(query.table_name(), "table")?;
        if record.is_empty() {
            return Err(LedgerError::invalid_input("record", "record has no columns"));
        }
        for column in record.columns() {
            ensure_identifier(column, "column")?;
        }

        let columns: Vec<&str> = record.columns().collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            query.table_name(),
            columns.join(", "),
            placeholders.join(", ")
        );

        self.connection
            .execute(&sql, params_from_iter(record.values()))
            .db_context("Failed to insert record")?;

        Ok(self.connection.last_insert_rowid())
    }

    /// Executes the projected, filtered read the query describes. An
    /// unconditioned query reads every row.
    pub fn select(&self, query: &Query) -> Result<Vec<Record>> {
        super::report("select", self.select_inner(query))
    }

    fn select_inner(&self, query: &Query) -> Result<Vec<Record>> {
        ensure_identifier(query.table_name(), "table")?;

        let mut stmt = self
            .connection
            .prepare(&query.select_sql())
            .db_context("Failed to prepare select")?;

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let records = stmt
            .query_map([], |row| {
                let mut record = Record::new();
                for (i, column) in columns.iter().enumerate() {
                    record.set(column.clone(), row.get::<_, Value>(i)?);
                }
                Ok(record)
            })
            .db_context("Failed to execute select")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch selected records")?;

        Ok(records)
    }

    /// Applies the record's columns as a SET list to every row the query
    /// matches and returns the affected-row count. An unconditioned query
    /// is refused before storage is touched.
    pub fn update(&self, query: &Query, changes: &Record) -> Result<usize> {
        super::report("update", self.update_inner(query, changes))
    }

    fn update_inner(&self, query: &Query, changes: &Record) -> Result<usize> {
        if !query.is_filtered() {
            return Err(LedgerError::filter_required("update"));
        }
        ensure_identifier(query.table_name(), "table")?;
        if changes.is_empty() {
            return Err(LedgerError::invalid_input("record", "record has no columns"));
        }
        for column in changes.columns() {
            ensure_identifier(column, "column")?;
        }

        let assignments: Vec<String> = changes
            .columns()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {}",
            query.table_name(),
            assignments.join(", "),
            query.where_clause()
        );

        self.connection
            .execute(&sql, params_from_iter(changes.values()))
            .db_context("Failed to update records")
    }

    /// Deletes every row the query matches and returns the affected-row
    /// count. An unconditioned query is refused before storage is touched.
    pub fn delete(&self, query: &Query) -> Result<usize> {
        super::report("delete", self.delete_inner(query))
    }

    fn delete_inner(&self, query: &Query) -> Result<usize> {
        if !query.is_filtered() {
            return Err(LedgerError::filter_required("delete"));
        }
        ensure_identifier(query.table_name(), "table")?;

        let sql = format!(
            "DELETE FROM {} WHERE {}",
            query.table_name(),
            query.where_clause()
        );

        self.connection
            .execute(&sql, [])
            .db_context("Failed to delete records")
    }
}
