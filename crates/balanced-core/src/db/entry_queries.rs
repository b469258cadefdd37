//! Accounting entry queries.
//!
//! The typed layer over the entries table. Reads and single-row mutations
//! go through the generic record surface with [`Query`] specifications;
//! recurrence materialization uses its own transaction so one template's
//! occurrences land atomically.

use jiff::Timestamp;
use rusqlite::params;

use super::Query;
use crate::error::{DatabaseResultExt, LedgerError, Result};
use crate::models::{Entry, Record, Totals};
use crate::params::{NewEntry, Page, UpdateEntry};
use crate::schema::ENTRIES_TABLE;

/// Newest-first pagination order; the id breaks ties between entries that
/// share a timestamp so the offset never skips or repeats a row.
const PAGE_ORDER: &str = "first_time DESC, id DESC";

// Aggregate projections for the running totals. COALESCE pins the empty
// table to zero instead of NULL.
const INCOME_SUM: &str = "COALESCE(SUM(CASE WHEN amount >= 0 THEN amount ELSE 0 END), 0) AS income";
const EXPENSE_SUM: &str = "COALESCE(SUM(CASE WHEN amount < 0 THEN -amount ELSE 0 END), 0) AS expense";
const DEPOSIT_SUM: &str = "COALESCE(SUM(amount), 0) AS deposit";

const INSERT_OCCURRENCE_SQL: &str = "INSERT INTO entries (amount, note, method, category, tags, first_time) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const ADVANCE_TRIGGER_SQL: &str = "UPDATE entries SET next_trigger_time = ?1 WHERE id = ?2";

impl super::Database {
    /// Records a new entry and returns it with its assigned id. Recurring
    /// entries get their first trigger one cycle after the first
    /// occurrence.
    pub fn insert_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let recurrence = entry.recurrence;
        if let Some(recurrence) = &recurrence {
            recurrence.validate()?;
        }
        let next_trigger = match &recurrence {
            Some(recurrence) => Some(recurrence.advance(entry.first_time)?),
            None => None,
        };

        let record = Record::new()
            .with("amount", entry.amount)
            .with("note", entry.note.clone())
            .with("method", entry.method.code())
            .with("category", entry.category.code())
            .with("tags", Entry::tags_column(&entry.tags))
            .with("cycle_count", recurrence.map(|r| i64::from(r.count)))
            .with("cycle_unit", recurrence.map(|r| r.unit.code()))
            .with("first_time", entry.first_time.as_millisecond())
            .with(
                "next_trigger_time",
                next_trigger.map(|t| t.as_millisecond()),
            );

        let id = self.insert(&Query::table(ENTRIES_TABLE), &record)?;

        Ok(Entry {
            id: id as u64,
            amount: entry.amount,
            note: entry.note.clone(),
            method: entry.method,
            category: entry.category,
            tags: entry.tags.clone(),
            recurrence,
            first_time: entry.first_time,
            next_trigger,
        })
    }

    /// Reads one page of entries, newest first. The caller advances the
    /// page offset between calls.
    pub fn entries_page(&self, page: &Page) -> Result<Vec<Entry>> {
        let records = self.select(
            &Query::table(ENTRIES_TABLE)
                .order_by(PAGE_ORDER)
                .page(*page),
        )?;
        records.iter().map(Entry::from_record).collect()
    }

    /// Retrieves an entry by its id.
    pub fn get_entry(&self, id: u64) -> Result<Option<Entry>> {
        let records = self.select(&Query::table(ENTRIES_TABLE).filter(format!("id = {id}")))?;
        records.first().map(Entry::from_record).transpose()
    }

    /// Applies a partial update to one entry and returns the affected-row
    /// count (0 when the id does not exist).
    pub fn update_entry(&self, id: u64, changes: &UpdateEntry) -> Result<usize> {
        if changes.is_empty() {
            return Err(LedgerError::invalid_input("update", "no fields to update"));
        }

        let mut record = Record::new();
        if let Some(amount) = changes.amount {
            record.set("amount", amount);
        }
        if let Some(note) = &changes.note {
            record.set("note", note.clone());
        }
        if let Some(method) = changes.method {
            record.set("method", method.code());
        }
        if let Some(category) = changes.category {
            record.set("category", category.code());
        }
        if let Some(tags) = &changes.tags {
            record.set("tags", Entry::tags_column(tags));
        }
        if let Some(first_time) = changes.first_time {
            record.set("first_time", first_time.as_millisecond());
        }
        if let Some(recurrence) = changes.recurrence {
            recurrence.validate()?;
            let current = self
                .get_entry(id)?
                .ok_or(LedgerError::EntryNotFound { id })?;
            let base = changes.first_time.unwrap_or(current.first_time);
            record.set("cycle_count", i64::from(recurrence.count));
            record.set("cycle_unit", recurrence.unit.code());
            record.set(
                "next_trigger_time",
                recurrence.advance(base)?.as_millisecond(),
            );
        }

        self.update(
            &Query::table(ENTRIES_TABLE).filter(format!("id = {id}")),
            &record,
        )
    }

    /// Deletes one entry by id and returns the affected-row count.
    pub fn delete_entry(&self, id: u64) -> Result<usize> {
        self.delete(&Query::table(ENTRIES_TABLE).filter(format!("id = {id}")))
    }

    /// Computes running totals with one aggregate select over the whole
    /// table. Totals never re-walk fetched pages, so overlapping pages
    /// cannot double-count.
    pub fn totals(&self) -> Result<Totals> {
        let records = self.select(
            &Query::table(ENTRIES_TABLE).fields([INCOME_SUM, EXPENSE_SUM, DEPOSIT_SUM]),
        )?;

        let Some(record) = records.first() else {
            return Ok(Totals::default());
        };

        Ok(Totals {
            income: record.number("income").unwrap_or(0.0),
            expense: record.number("expense").unwrap_or(0.0),
            deposit: record.number("deposit").unwrap_or(0.0),
        })
    }

    /// Lists recurring entries whose next trigger is at or before `now`,
    /// oldest trigger first.
    pub fn due_entries(&self, now: Timestamp) -> Result<Vec<Entry>> {
        let records = self.select(
            &Query::table(ENTRIES_TABLE)
                .filter("next_trigger_time IS NOT NULL")
                .filter(format!("next_trigger_time <= {}", now.as_millisecond()))
                .order_by("next_trigger_time ASC, id ASC"),
        )?;
        records.iter().map(Entry::from_record).collect()
    }

    /// Materializes every elapsed occurrence of each due recurring entry.
    ///
    /// For each template with `next_trigger_time <= now`, inserts one plain
    /// (non-recurring) entry per elapsed cycle, dated at the trigger
    /// instant, and advances the template's trigger strictly past `now`.
    /// One transaction per template. Returns the created occurrences.
    pub fn materialize_due(&mut self, now: Timestamp) -> Result<Vec<Entry>> {
        super::report("materialize_due", self.materialize_due_inner(now))
    }

    fn materialize_due_inner(&mut self, now: Timestamp) -> Result<Vec<Entry>> {
        let templates = self.due_entries(now)?;
        let mut created = Vec::new();

        for template in templates {
            let (Some(recurrence), Some(mut trigger)) =
                (template.recurrence, template.next_trigger)
            else {
                // A trigger without cycle fields is stale data; leave it alone.
                log::warn!(
                    "entry {} has a trigger but no recurrence; skipping",
                    template.id
                );
                continue;
            };

            let tx = self
                .connection
                .transaction()
                .db_context("Failed to begin transaction")?;

            while trigger <= now {
                tx.execute(
                    INSERT_OCCURRENCE_SQL,
                    params![
                        template.amount,
                        template.note.as_deref(),
                        template.method.code(),
                        template.category.code(),
                        Entry::tags_column(&template.tags),
                        trigger.as_millisecond()
                    ],
                )
                .db_context("Failed to insert occurrence")?;

                created.push(Entry {
                    id: tx.last_insert_rowid() as u64,
                    amount: template.amount,
                    note: template.note.clone(),
                    method: template.method,
                    category: template.category,
                    tags: template.tags.clone(),
                    recurrence: None,
                    first_time: trigger,
                    next_trigger: None,
                });

                trigger = recurrence.advance(trigger)?;
            }

            tx.execute(
                ADVANCE_TRIGGER_SQL,
                params![trigger.as_millisecond(), template.id as i64],
            )
            .db_context("Failed to advance trigger")?;

            tx.commit().db_context("Failed to commit transaction")?;
        }

        Ok(created)
    }
}
