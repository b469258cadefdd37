//! Tests for the async ledger facade.

use jiff::Timestamp;
use tempfile::TempDir;

use super::{Ledger, LedgerBuilder};
use crate::error::LedgerError;
use crate::models::{Category, Method};
use crate::params::{NewEntry, Page};

async fn test_ledger() -> (TempDir, Ledger) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let ledger = LedgerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build ledger");
    (temp_dir, ledger)
}

fn sample_entry(amount: f64) -> NewEntry {
    NewEntry {
        amount,
        note: None,
        method: Method::Cash,
        category: Category::DailyExpense,
        tags: Vec::new(),
        recurrence: None,
        first_time: Timestamp::now(),
    }
}

#[tokio::test]
async fn build_creates_database_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");

    LedgerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to build ledger");

    assert!(db_path.exists());
}

#[tokio::test]
async fn operations_after_close_fail_fast() {
    let (_temp_dir, ledger) = test_ledger().await;

    ledger.close().await.expect("Failed to close ledger");

    match ledger.add_entry(&sample_entry(-1.0)).await {
        Err(LedgerError::StoreClosed) => {}
        other => panic!("Expected StoreClosed, got {other:?}"),
    }
    match ledger.close().await {
        Err(LedgerError::StoreClosed) => {}
        other => panic!("Expected StoreClosed, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_adds_are_serialized() {
    let (_temp_dir, ledger) = test_ledger().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let ledger = ledger.clone();
        handles.push(tokio::spawn(async move {
            ledger.add_entry(&sample_entry(-f64::from(i + 1))).await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("Task panicked")
            .expect("Failed to add entry");
    }

    let page = ledger
        .entries_page(&Page {
            limit: 20,
            offset: 0,
        })
        .await
        .expect("Failed to read page");
    assert_eq!(page.len(), 8);

    let totals = ledger.totals().await.expect("Failed to compute totals");
    assert_eq!(totals.expense, (1..=8).map(f64::from).sum::<f64>());
    assert_eq!(totals.income, 0.0);
}

#[tokio::test]
async fn totals_follow_the_sign_convention() {
    let (_temp_dir, ledger) = test_ledger().await;

    ledger
        .add_entry(&sample_entry(250.0))
        .await
        .expect("Failed to add income");
    ledger
        .add_entry(&sample_entry(-75.5))
        .await
        .expect("Failed to add expense");

    let totals = ledger.totals().await.expect("Failed to compute totals");
    assert_eq!(totals.income, 250.0);
    assert_eq!(totals.expense, 75.5);
    assert_eq!(totals.deposit, 174.5);
}
