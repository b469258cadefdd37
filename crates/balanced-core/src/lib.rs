//! Core library for the Balanced personal finance tracker.
//!
//! This crate provides the embedded record store and aggregation logic the
//! application is built on: a schema registry, a chainable query surface
//! over one local SQLite database, a month-bucketed section aggregator for
//! paginated display, and running income/expense/deposit totals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Ledger      │    │    Database     │    │     SQLite      │
//! │  (async facade, │───▶│ (Query + Record │───▶│  (one handle,   │
//! │   one mutex)    │    │   CRUD, typed   │    │   rusqlite)     │
//! │                 │    │   queries)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Queries are immutable [`db::Query`] values handed to the terminal
//! operations, so no query state survives — or can leak between — calls.
//! The [`sections`] module folds pages read through this surface into
//! ordered display sections.
//!
//! # Quick Start
//!
//! ```rust
//! use balanced_core::{LedgerBuilder, params::{NewEntry, Page}, sections};
//! use balanced_core::models::{Category, Method};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ledger = LedgerBuilder::new()
//!     .with_database_path(Some("balanced.db"))
//!     .build()
//!     .await?;
//!
//! ledger.add_entry(&NewEntry {
//!     amount: -42.5,
//!     note: Some("groceries".to_string()),
//!     method: Method::Cash,
//!     category: Category::Catering,
//!     tags: vec![],
//!     recurrence: None,
//!     first_time: jiff::Timestamp::now(),
//! }).await?;
//!
//! // Fold pages into month sections as they arrive.
//! let mut accounts = Vec::new();
//! let page = ledger.entries_page(&Page::default()).await?;
//! sections::merge_page(&mut accounts, page);
//!
//! let totals = ledger.totals().await?;
//! println!("{totals}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod params;
pub mod schema;
pub mod sections;

// Re-export commonly used types
pub use db::{Database, Query};
pub use display::{Currency, LocalDate};
pub use error::{LedgerError, Result};
pub use ledger::{Ledger, LedgerBuilder};
pub use models::{Category, CycleUnit, Entry, Method, Record, Recurrence, Tag, Totals};
pub use schema::TableSchema;
pub use sections::{Section, entry_count, merge_page};
