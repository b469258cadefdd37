//! Parameter structures for ledger operations
//!
//! Shared parameter structures usable across interfaces (CLI, future UIs)
//! without framework-specific derives. Interface layers wrap these with
//! their own argument types (clap derives on the CLI) and convert via
//! `From`/`Into`, keeping the core free of UI concerns.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Method, Recurrence};

/// Parameters for recording a new accounting entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    /// Signed amount (negative = expense)
    pub amount: f64,
    /// Optional free-form note
    pub note: Option<String>,
    /// Payment method
    pub method: Method,
    /// Spending category
    pub category: Category,
    /// Tag titles to attach
    #[serde(default)]
    pub tags: Vec<String>,
    /// Recurrence descriptor; entries without one occur exactly once
    pub recurrence: Option<Recurrence>,
    /// When the entry (first) occurred
    pub first_time: Timestamp,
}

/// Parameters for a partial entry update.
///
/// Every field is optional; absent fields are left untouched. Providing a
/// recurrence also recomputes the entry's next trigger from its first
/// occurrence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEntry {
    /// New signed amount
    pub amount: Option<f64>,
    /// New note
    pub note: Option<String>,
    /// New payment method
    pub method: Option<Method>,
    /// New spending category
    pub category: Option<Category>,
    /// Replacement tag titles
    pub tags: Option<Vec<String>>,
    /// Replacement recurrence descriptor
    pub recurrence: Option<Recurrence>,
    /// New first occurrence
    pub first_time: Option<Timestamp>,
}

impl UpdateEntry {
    /// Returns true if the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.note.is_none()
            && self.method.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.recurrence.is_none()
            && self.first_time.is_none()
    }
}

/// One page of a paginated select: how many records and how many are
/// already fetched. The caller owns the offset and must advance it
/// strictly between pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Page {
    /// Maximum number of records to return
    pub limit: u32,
    /// Count of records already fetched
    #[serde(default)]
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Parameters for creating a new tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTag {
    /// Tag title
    pub title: String,
}
