//! Tag queries.

use super::Query;
use crate::error::{LedgerError, Result};
use crate::models::{Record, Tag};
use crate::params::NewTag;
use crate::schema::TAGS_TABLE;

impl super::Database {
    /// Creates a tag and returns it with its assigned id.
    pub fn insert_tag(&self, tag: &NewTag) -> Result<Tag> {
        if tag.title.trim().is_empty() {
            return Err(LedgerError::invalid_input("title", "tag title cannot be empty"));
        }

        let record = Record::new().with("title", tag.title.clone());
        let id = self.insert(&Query::table(TAGS_TABLE), &record)?;

        Ok(Tag {
            id: id as u64,
            title: tag.title.clone(),
        })
    }

    /// Lists all tags in creation order.
    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        let records = self.select(&Query::table(TAGS_TABLE).order_by("id ASC"))?;

        records
            .iter()
            .map(|record| {
                let id = record
                    .integer("id")
                    .ok_or_else(|| LedgerError::invalid_input("id", "missing or non-integer column"))?;
                let title = record
                    .text("title")
                    .ok_or_else(|| LedgerError::invalid_input("title", "missing or non-text column"))?;
                Ok(Tag {
                    id: id as u64,
                    title: title.to_string(),
                })
            })
            .collect()
    }
}
