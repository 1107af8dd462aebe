// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use spendbook::application::LedgerService;
use spendbook::storage::StoreConfig;
use sqlx::{Connection, SqliteConnection};
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = LedgerService::open(&test_config(&temp_dir)).await?;
    Ok((service, temp_dir))
}

pub fn test_config(temp_dir: &TempDir) -> StoreConfig {
    StoreConfig::new(db_path(temp_dir))
}

pub fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("test.db")
}

/// Run raw SQL against the test database, bypassing the service
pub async fn execute_raw(temp_dir: &TempDir, sql: &str) -> Result<()> {
    let url = format!("sqlite:{}", db_path(temp_dir).display());
    let mut conn = SqliteConnection::connect(&url).await?;
    sqlx::query(sql).execute(&mut conn).await?;
    conn.close().await?;
    Ok(())
}

/// Test fixture: a salary and three expenses across two categories
pub async fn add_sample_records(service: &mut LedgerService) -> Result<()> {
    service
        .add("Income", "100", "Salary", "2024-01-01", "")
        .await?;
    service
        .add("Expense", "30", "Food", "2024-01-02", "groceries")
        .await?;
    service
        .add("Expense", "20", "Food", "2024-01-03", "")
        .await?;
    service
        .add("Expense", "10", "Transport", "2024-01-04", "bus")
        .await?;
    Ok(())
}
