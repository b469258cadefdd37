//! Time-bucketed section aggregation.
//!
//! Folds a paginated stream of entries into an ordered list of
//! month-labelled sections for display. Pages arrive newest-first from
//! [`crate::db::Database::entries_page`]; each page is merged into the
//! existing section list without reordering or duplicating buckets.
//!
//! The aggregator performs no deduplication by id: re-merging a page that
//! was already merged duplicates its entries. Callers own the pagination
//! offset ([`entry_count`] is the canonical value) and must advance it
//! strictly between pages.

use jiff::{Timestamp, tz::TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::Entry;

/// One display section: a month label and the entries bucketed under it,
/// in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Month label of the bucket (e.g. "June")
    pub title: String,

    /// Entries in arrival order
    pub entries: Vec<Entry>,
}

/// Month label of an instant in the system timezone.
///
/// The label carries no year, matching the app this feeds: a page that
/// crosses into the previous year's June lands in the existing "June"
/// section.
pub fn month_label(at: Timestamp) -> String {
    at.to_zoned(TimeZone::system()).strftime("%B").to_string()
}

/// Merges one page of entries into the section list.
///
/// Entries are walked in page order. An entry whose label matches an
/// existing section (including one created earlier in this merge) is
/// appended to that section; otherwise a new section is pushed at the end.
/// Existing sections and their entries are never removed or reordered. An
/// empty page leaves the list untouched.
pub fn merge_page(sections: &mut Vec<Section>, page: Vec<Entry>) {
    for entry in page {
        let title = month_label(entry.first_time);
        match sections.iter_mut().find(|section| section.title == title) {
            Some(section) => section.entries.push(entry),
            None => sections.push(Section {
                title,
                entries: vec![entry],
            }),
        }
    }
}

/// Total number of entries across all sections; the offset of the next
/// page.
pub fn entry_count(sections: &[Section]) -> usize {
    sections.iter().map(|section| section.entries.len()).sum()
}
