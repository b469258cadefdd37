//! Command handlers bridging parsed arguments to the ledger.

use anyhow::{Context, Result};
use balanced_core::params::{NewTag, Page};
use balanced_core::sections::{entry_count, merge_page, Section};
use balanced_core::Ledger;
use jiff::Timestamp;
use log::info;

use crate::args::{AddArgs, DeleteArgs, ListArgs, StatsArgs, TagCommands, UpdateArgs};

/// Command dispatcher owning the ledger for the lifetime of one
/// invocation.
pub struct Cli {
    ledger: Ledger,
}

impl Cli {
    /// Creates a new CLI handler with the given ledger.
    pub fn new(ledger: Ledger) -> Self {
        Self { ledger }
    }

    /// Record a new entry.
    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let params = args.into_params()?;
        let entry = self
            .ledger
            .add_entry(&params)
            .await
            .context("Failed to add entry")?;

        info!("Added entry {}", entry.id);
        println!("{entry}");
        Ok(())
    }

    /// List entries grouped by month, with running totals on top.
    pub async fn list(&self, args: ListArgs) -> Result<()> {
        let sections = self.fetch_sections(args.page_size, args.pages).await?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&sections)?);
            return Ok(());
        }

        if sections.is_empty() {
            println!("No entries yet.");
            return Ok(());
        }

        let totals = self
            .ledger
            .totals()
            .await
            .context("Failed to compute totals")?;
        println!("{totals}");
        println!();
        for section in &sections {
            print!("{section}");
        }
        Ok(())
    }

    /// Show running totals.
    pub async fn stats(&self, args: StatsArgs) -> Result<()> {
        let totals = self
            .ledger
            .totals()
            .await
            .context("Failed to compute totals")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&totals)?);
        } else {
            println!("{totals}");
        }
        Ok(())
    }

    /// Update fields of an existing entry.
    pub async fn update(&self, args: UpdateArgs) -> Result<()> {
        let (id, changes) = args.into_params()?;
        let affected = self
            .ledger
            .update_entry(id, &changes)
            .await
            .context("Failed to update entry")?;

        if affected == 0 {
            println!("No entry with ID {id}.");
        } else {
            println!("Updated entry {id}.");
        }
        Ok(())
    }

    /// Delete an entry.
    pub async fn delete(&self, args: DeleteArgs) -> Result<()> {
        let affected = self
            .ledger
            .delete_entry(args.id)
            .await
            .context("Failed to delete entry")?;

        if affected == 0 {
            println!("No entry with ID {}.", args.id);
        } else {
            println!("Deleted entry {}.", args.id);
        }
        Ok(())
    }

    /// Tag management.
    pub async fn tag(&self, command: TagCommands) -> Result<()> {
        match command {
            TagCommands::Add { title } => {
                let tag = self
                    .ledger
                    .add_tag(&NewTag { title })
                    .await
                    .context("Failed to add tag")?;
                println!("{tag}");
            }
            TagCommands::List => {
                let tags = self.ledger.list_tags().await.context("Failed to list tags")?;
                if tags.is_empty() {
                    println!("No tags yet.");
                }
                for tag in tags {
                    println!("{tag}");
                }
            }
        }
        Ok(())
    }

    /// Materialize recurring entries that have come due.
    pub async fn due(&self) -> Result<()> {
        let occurrences = self
            .ledger
            .materialize_due(Timestamp::now())
            .await
            .context("Failed to materialize due entries")?;

        if occurrences.is_empty() {
            println!("Nothing due.");
            return Ok(());
        }
        println!("Booked {} occurrence(s):", occurrences.len());
        for entry in occurrences {
            println!("{entry}");
        }
        Ok(())
    }

    /// Pages through the store, folding each page into month sections, the
    /// section count serving as the next offset.
    async fn fetch_sections(&self, page_size: u32, pages: Option<u32>) -> Result<Vec<Section>> {
        let mut sections = Vec::new();
        let mut fetched_pages = 0;

        loop {
            if pages.is_some_and(|max| fetched_pages >= max) {
                break;
            }
            let page = self
                .ledger
                .entries_page(&Page {
                    limit: page_size,
                    offset: entry_count(&sections) as u32,
                })
                .await
                .context("Failed to read entries")?;
            if page.is_empty() {
                break;
            }
            fetched_pages += 1;
            merge_page(&mut sections, page);
        }

        Ok(sections)
    }
}
