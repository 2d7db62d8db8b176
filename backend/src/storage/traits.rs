//! # Storage Traits
//!
//! The domain layer talks to the expense store only through these traits.

use anyhow::Result;
use async_trait::async_trait;
use shared::Expense;

#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// All stored expenses in insertion order
    async fn list_expenses(&self) -> Result<Vec<Expense>>;

    /// Persist a fully-formed expense (identity and timestamps already set)
    async fn store_expense(&self, expense: &Expense) -> Result<()>;

    /// Delete by identity.
    /// Returns true if a record was found and deleted, false otherwise
    async fn delete_expense(&self, expense_id: &str) -> Result<bool>;
}
