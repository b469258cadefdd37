//! Tag operations for the Ledger.

use super::Ledger;
use crate::{error::Result, models::Tag, params::NewTag};

impl Ledger {
    /// Creates a tag and returns it with its assigned id.
    pub async fn add_tag(&self, tag: &NewTag) -> Result<Tag> {
        let tag = tag.clone();
        self.run(move |db| db.insert_tag(&tag)).await
    }

    /// Lists all tags in creation order.
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.run(|db| db.list_tags()).await
    }
}
