//! Shared test infrastructure for storage, domain and REST tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::Expense;
use std::sync::Arc;

use super::connection::DbConnection;
use super::expense_repository::ExpenseRepository;
use super::traits::ExpenseStorage;

/// Fresh in-memory database wrapped in a repository
pub async fn in_memory_storage() -> Arc<dyn ExpenseStorage> {
    let db = DbConnection::init_test().await.expect("Failed to create test database");
    Arc::new(ExpenseRepository::new(db))
}

/// Storage double whose every operation fails, standing in for an
/// unreachable store
pub struct UnavailableStorage;

#[async_trait]
impl ExpenseStorage for UnavailableStorage {
    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        Err(anyhow!("store unreachable"))
    }

    async fn store_expense(&self, _expense: &Expense) -> Result<()> {
        Err(anyhow!("store unreachable"))
    }

    async fn delete_expense(&self, _expense_id: &str) -> Result<bool> {
        Err(anyhow!("store unreachable"))
    }
}
