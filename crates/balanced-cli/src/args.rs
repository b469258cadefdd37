//! Command-line argument definitions using clap
//!
//! Argument structures carry the clap-specific surface (flags, help text,
//! defaults) and convert into the core parameter types, keeping
//! `balanced-core` free of CLI framework concerns.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use balanced_core::models::{Category, CycleUnit, Method, Recurrence};
use balanced_core::params::{NewEntry, UpdateEntry};
use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::{tz::TimeZone, Timestamp};

/// Main command-line interface for the Balanced finance tracker
///
/// Balanced keeps a personal accounting ledger in a local SQLite database:
/// record income and expenses, browse them grouped by month, track running
/// totals, and let recurring entries book themselves.
#[derive(Parser)]
#[command(version, about, name = "balanced")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/balanced/balanced.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Balanced CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new entry (negative amount = expense)
    #[command(alias = "a")]
    Add(AddArgs),
    /// List entries grouped by month
    #[command(alias = "l")]
    List(ListArgs),
    /// Show running income/expense/deposit totals
    Stats(StatsArgs),
    /// Update fields of an existing entry
    Update(UpdateArgs),
    /// Delete an entry
    Delete(DeleteArgs),
    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },
    /// Materialize recurring entries that have come due
    Due,
}

/// Tag subcommands
#[derive(Subcommand)]
pub enum TagCommands {
    /// Create a new tag
    Add {
        /// Tag title
        title: String,
    },
    /// List all tags
    List,
}

/// Record a new entry
#[derive(ClapArgs)]
pub struct AddArgs {
    /// Signed amount; negative for expenses
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,
    /// Optional note
    #[arg(short, long)]
    pub note: Option<String>,
    /// Payment method (cash, alipay, wechat)
    #[arg(short, long, default_value = "cash")]
    pub method: String,
    /// Spending category (daily, catering, entertainment, education, loan,
    /// clothing)
    #[arg(short, long, default_value = "daily")]
    pub category: String,
    /// Tag titles to attach; repeat for several tags
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
    /// Entry date as YYYY-MM-DD; defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Repeat every N cycle units
    #[arg(long, requires = "cycle_unit")]
    pub cycle_count: Option<u32>,
    /// Cycle unit (day, week, month)
    #[arg(long, requires = "cycle_count")]
    pub cycle_unit: Option<String>,
}

impl AddArgs {
    /// Parse CLI strings into the core parameter structure.
    pub fn into_params(self) -> Result<NewEntry> {
        let method = Method::from_str(&self.method).map_err(anyhow::Error::msg)?;
        let category = Category::from_str(&self.category).map_err(anyhow::Error::msg)?;
        let recurrence = parse_recurrence(self.cycle_count, self.cycle_unit.as_deref())?;
        let first_time = match self.date.as_deref() {
            Some(date) => parse_date(date)?,
            None => Timestamp::now(),
        };

        Ok(NewEntry {
            amount: self.amount,
            note: self.note,
            method,
            category,
            tags: self.tags,
            recurrence,
            first_time,
        })
    }
}

/// List entries grouped by month
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Records fetched per page
    #[arg(long, default_value_t = 10)]
    pub page_size: u32,
    /// Stop after this many pages; fetches everything when omitted
    #[arg(long)]
    pub pages: Option<u32>,
    /// Emit sections as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            page_size: 10,
            pages: None,
            json: false,
        }
    }
}

/// Show running totals
#[derive(ClapArgs, Default)]
pub struct StatsArgs {
    /// Emit totals as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Update fields of an existing entry
#[derive(ClapArgs)]
pub struct UpdateArgs {
    /// ID of the entry to update
    pub id: u64,
    /// New signed amount
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,
    /// New note
    #[arg(long)]
    pub note: Option<String>,
    /// New payment method
    #[arg(long)]
    pub method: Option<String>,
    /// New spending category
    #[arg(long)]
    pub category: Option<String>,
    /// Replacement tag titles; repeat for several tags
    #[arg(long = "tag")]
    pub tags: Option<Vec<String>>,
    /// New entry date as YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// Repeat every N cycle units
    #[arg(long, requires = "cycle_unit")]
    pub cycle_count: Option<u32>,
    /// Cycle unit (day, week, month)
    #[arg(long, requires = "cycle_count")]
    pub cycle_unit: Option<String>,
}

impl UpdateArgs {
    /// Parse CLI strings into the core parameter structure.
    pub fn into_params(self) -> Result<(u64, UpdateEntry)> {
        let method = self
            .method
            .as_deref()
            .map(Method::from_str)
            .transpose()
            .map_err(anyhow::Error::msg)?;
        let category = self
            .category
            .as_deref()
            .map(Category::from_str)
            .transpose()
            .map_err(anyhow::Error::msg)?;
        let recurrence = parse_recurrence(self.cycle_count, self.cycle_unit.as_deref())?;
        let first_time = self.date.as_deref().map(parse_date).transpose()?;

        Ok((
            self.id,
            UpdateEntry {
                amount: self.amount,
                note: self.note,
                method,
                category,
                tags: self.tags,
                recurrence,
                first_time,
            },
        ))
    }
}

/// Delete an entry
#[derive(ClapArgs)]
pub struct DeleteArgs {
    /// ID of the entry to delete
    pub id: u64,
}

/// Parses a `YYYY-MM-DD` date into a timestamp at noon in the system
/// timezone.
fn parse_date(s: &str) -> Result<Timestamp> {
    let date: jiff::civil::Date = s
        .parse()
        .with_context(|| format!("Invalid date '{s}' (expected YYYY-MM-DD)"))?;
    Ok(date
        .at(12, 0, 0, 0)
        .to_zoned(TimeZone::system())
        .with_context(|| format!("Date '{s}' does not exist in the system timezone"))?
        .timestamp())
}

fn parse_recurrence(count: Option<u32>, unit: Option<&str>) -> Result<Option<Recurrence>> {
    match (count, unit) {
        (Some(count), Some(unit)) => {
            let unit = CycleUnit::from_str(unit).map_err(anyhow::Error::msg)?;
            Ok(Some(Recurrence { count, unit }))
        }
        // clap's `requires` keeps these paired; a lone field cannot reach
        // this point.
        _ => Ok(None),
    }
}
