//! Entry operations for the Ledger.

use jiff::Timestamp;

use super::Ledger;
use crate::{
    error::Result,
    models::{Entry, Totals},
    params::{NewEntry, Page, UpdateEntry},
};

impl Ledger {
    /// Records a new accounting entry and returns it with its assigned id.
    pub async fn add_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let entry = entry.clone();
        self.run(move |db| db.insert_entry(&entry)).await
    }

    /// Reads one page of entries, newest first. The caller advances the
    /// page offset between calls (see [`crate::sections::entry_count`]).
    pub async fn entries_page(&self, page: &Page) -> Result<Vec<Entry>> {
        let page = *page;
        self.run(move |db| db.entries_page(&page)).await
    }

    /// Retrieves an entry by its id.
    pub async fn get_entry(&self, id: u64) -> Result<Option<Entry>> {
        self.run(move |db| db.get_entry(id)).await
    }

    /// Applies a partial update to one entry; returns the affected-row
    /// count.
    pub async fn update_entry(&self, id: u64, changes: &UpdateEntry) -> Result<usize> {
        let changes = changes.clone();
        self.run(move |db| db.update_entry(id, &changes)).await
    }

    /// Deletes one entry by id; returns the affected-row count.
    pub async fn delete_entry(&self, id: u64) -> Result<usize> {
        self.run(move |db| db.delete_entry(id)).await
    }

    /// Computes running income/expense/deposit totals over all entries.
    pub async fn totals(&self) -> Result<Totals> {
        self.run(|db| db.totals()).await
    }

    /// Lists recurring entries due at or before `now`.
    pub async fn due_entries(&self, now: Timestamp) -> Result<Vec<Entry>> {
        self.run(move |db| db.due_entries(now)).await
    }

    /// Materializes every elapsed occurrence of each due recurring entry
    /// and returns the created occurrences.
    pub async fn materialize_due(&self, now: Timestamp) -> Result<Vec<Entry>> {
        self.run(move |db| db.materialize_due(now)).await
    }
}
