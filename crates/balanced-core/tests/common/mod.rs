use balanced_core::LedgerBuilder;
use tempfile::TempDir;

/// Helper function to create a test ledger
pub async fn create_test_ledger() -> (TempDir, balanced_core::Ledger) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let ledger = LedgerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create ledger");
    (temp_dir, ledger)
}
