//! Generic store operations for the Ledger.
//!
//! The untyped record surface, for callers that manage their own tables.
//! Each wrapper clones the specification into the blocking closure; the
//! guarantees are those of the [`crate::db`] layer.

use super::Ledger;
use crate::{
    db::Query,
    error::Result,
    models::Record,
    schema::TableSchema,
};

impl Ledger {
    /// Creates a table if it does not exist yet.
    pub async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let schema = schema.clone();
        self.run(move |db| db.create_table(&schema)).await
    }

    /// Drops a table and all of its rows.
    pub async fn drop_table(&self, name: &str) -> Result<()> {
        let name = name.to_string();
        self.run(move |db| db.drop_table(&name)).await
    }

    /// Inserts one record into the query's table; returns the assigned
    /// row id.
    pub async fn insert(&self, query: &Query, record: &Record) -> Result<i64> {
        let query = query.clone();
        let record = record.clone();
        self.run(move |db| db.insert(&query, &record)).await
    }

    /// Executes the projected, filtered read the query describes.
    pub async fn select(&self, query: &Query) -> Result<Vec<Record>> {
        let query = query.clone();
        self.run(move |db| db.select(&query)).await
    }

    /// Updates every row the query matches; refuses an unconditioned
    /// query.
    pub async fn update(&self, query: &Query, changes: &Record) -> Result<usize> {
        let query = query.clone();
        let changes = changes.clone();
        self.run(move |db| db.update(&query, &changes)).await
    }

    /// Deletes every row the query matches; refuses an unconditioned
    /// query.
    pub async fn delete(&self, query: &Query) -> Result<usize> {
        let query = query.clone();
        self.run(move |db| db.delete(&query)).await
    }
}
