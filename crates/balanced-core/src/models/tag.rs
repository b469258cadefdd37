//! User-defined tag model.

use serde::{Deserialize, Serialize};

/// One user-defined tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Tag title
    pub title: String,
}
