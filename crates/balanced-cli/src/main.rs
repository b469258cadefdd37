//! Balanced CLI Application
//!
//! Command-line interface for the Balanced personal finance tracker.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands, ListArgs};
use balanced_core::LedgerBuilder;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        command,
    } = Args::parse();

    let ledger = LedgerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize ledger")?;

    info!("Balanced started");

    let cli = Cli::new(ledger);
    match command {
        Some(Commands::Add(args)) => cli.add(args).await,
        Some(Commands::List(args)) => cli.list(args).await,
        Some(Commands::Stats(args)) => cli.stats(args).await,
        Some(Commands::Update(args)) => cli.update(args).await,
        Some(Commands::Delete(args)) => cli.delete(args).await,
        Some(Commands::Tag { command }) => cli.tag(command).await,
        Some(Commands::Due) => cli.due().await,
        None => cli.list(ListArgs::default()).await,
    }
}
