//! Accounting entry model and its mapping to stored records.

use jiff::{Span, Timestamp, tz::TimeZone};
use serde::{Deserialize, Serialize};

use super::{Category, CycleUnit, Method, Record};
use crate::error::{LedgerError, Result};

/// Largest accepted cycle count. Keeps calendar arithmetic inside the range
/// jiff spans support without panicking.
pub const MAX_CYCLE_COUNT: u32 = 1000;

/// Recurrence descriptor of a recurring entry: every `count` `unit`s.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recurrence {
    /// Number of cycle units between occurrences (at least 1)
    pub count: u32,

    /// Calendar unit of one cycle
    pub unit: CycleUnit,
}

impl Recurrence {
    /// Validates the cycle count range.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_CYCLE_COUNT {
            return Err(LedgerError::invalid_input(
                "recurrence",
                format!("cycle count must be between 1 and {MAX_CYCLE_COUNT}"),
            ));
        }
        Ok(())
    }

    /// Advances a trigger instant by one cycle using calendar arithmetic in
    /// the system timezone.
    pub fn advance(&self, from: Timestamp) -> Result<Timestamp> {
        self.validate()?;
        let span = match self.unit {
            CycleUnit::Month => Span::new().months(i64::from(self.count)),
            CycleUnit::Week => Span::new().weeks(i64::from(self.count)),
            CycleUnit::Day => Span::new().days(i64::from(self.count)),
        };
        from.to_zoned(TimeZone::system())
            .checked_add(span)
            .map(|zoned| zoned.timestamp())
            .map_err(|e| LedgerError::invalid_input("recurrence", e.to_string()))
    }
}

/// One accounting entry.
///
/// `amount` is signed: negative values are expenses, non-negative values
/// income. `first_time` is when the entry (first) occurred;
/// `next_trigger` is set only while the entry recurs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Signed amount (negative = expense)
    pub amount: f64,

    /// Free-form note
    pub note: Option<String>,

    /// Payment method
    pub method: Method,

    /// Spending category
    pub category: Category,

    /// User-defined tag titles
    #[serde(default)]
    pub tags: Vec<String>,

    /// Recurrence descriptor for recurring entries
    pub recurrence: Option<Recurrence>,

    /// First occurrence (UTC)
    pub first_time: Timestamp,

    /// Next materialization instant for recurring entries (UTC)
    pub next_trigger: Option<Timestamp>,
}

impl Entry {
    /// Builds an entry from a full record of the entries table.
    ///
    /// The record must carry every column of
    /// [`crate::schema::entries_schema`]; a missing or mistyped column is an
    /// input error naming the column.
    pub fn from_record(record: &Record) -> Result<Self> {
        let id = require_integer(record, "id")?;
        if id < 0 {
            return Err(LedgerError::invalid_input("id", "negative row id"));
        }

        let method_code = require_integer(record, "method")?;
        let method = Method::from_code(method_code).ok_or_else(|| {
            LedgerError::invalid_input("method", format!("unknown method code {method_code}"))
        })?;

        let category_code = require_integer(record, "category")?;
        let category = Category::from_code(category_code).ok_or_else(|| {
            LedgerError::invalid_input("category", format!("unknown category code {category_code}"))
        })?;

        let tags = record
            .text("tags")
            .map(|s| s.split(',').map(String::from).collect())
            .unwrap_or_default();

        let recurrence = recurrence_from_record(record)?;

        let first_time = timestamp_from_millis(require_integer(record, "first_time")?, "first_time")?;
        let next_trigger = match record.integer("next_trigger_time") {
            Some(ms) => Some(timestamp_from_millis(ms, "next_trigger_time")?),
            None => None,
        };

        Ok(Entry {
            id: id as u64,
            amount: record.number("amount").ok_or_else(|| {
                LedgerError::invalid_input("amount", "missing or non-numeric column")
            })?,
            note: record.text("note").map(String::from),
            method,
            category,
            tags,
            recurrence,
            first_time,
            next_trigger,
        })
    }

    /// Joins the tag titles back into their stored representation, or None
    /// when the entry has no tags.
    pub(crate) fn tags_column(tags: &[String]) -> Option<String> {
        if tags.is_empty() {
            None
        } else {
            Some(tags.join(","))
        }
    }
}

/// Reads the paired cycle columns, enforcing the both-or-neither invariant.
fn recurrence_from_record(record: &Record) -> Result<Option<Recurrence>> {
    let count = record.integer("cycle_count");
    let unit_code = record.integer("cycle_unit");

    match (count, unit_code) {
        (None, None) => Ok(None),
        (Some(count), Some(code)) => {
            let unit = CycleUnit::from_code(code).ok_or_else(|| {
                LedgerError::invalid_input("cycle_unit", format!("unknown cycle unit code {code}"))
            })?;
            let count = u32::try_from(count).map_err(|_| {
                LedgerError::invalid_input("cycle_count", format!("cycle count {count} out of range"))
            })?;
            let recurrence = Recurrence { count, unit };
            recurrence.validate()?;
            Ok(Some(recurrence))
        }
        _ => Err(LedgerError::invalid_input(
            "recurrence",
            "cycle_count and cycle_unit must both be present or both be absent",
        )),
    }
}

fn require_integer(record: &Record, column: &str) -> Result<i64> {
    record
        .integer(column)
        .ok_or_else(|| LedgerError::invalid_input(column, "missing or non-integer column"))
}

fn timestamp_from_millis(ms: i64, column: &str) -> Result<Timestamp> {
    Timestamp::from_millisecond(ms)
        .map_err(|e| LedgerError::invalid_input(column, format!("invalid timestamp: {e}")))
}
