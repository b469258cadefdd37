//! Table lifecycle operations.

use crate::error::{DatabaseResultExt, Result};
use crate::schema::{self, TableSchema};

impl super::Database {
    /// Creates the table described by `schema` if it does not exist yet.
    /// Re-creating an existing table is a success, not an error.
    pub fn create_table(&self, table: &TableSchema) -> Result<()> {
        super::report("create_table", self.create_table_inner(table))
    }

    fn create_table_inner(&self, table: &TableSchema) -> Result<()> {
        table.validate()?;
        self.connection
            .execute(&table.create_sql(), [])
            .db_context("Failed to create table")?;
        Ok(())
    }

    /// Drops a table and all of its rows. Irrecoverable; any confirmation
    /// is the caller's concern.
    pub fn drop_table(&self, name: &str) -> Result<()> {
        super::report("drop_table", self.drop_table_inner(name))
    }

    fn drop_table_inner(&self, name: &str) -> Result<()> {
        schema::ensure_identifier(name, "table")?;
        self.connection
            .execute(&format!("DROP TABLE {name}"), [])
            .db_context("Failed to drop table")?;
        Ok(())
    }
}
