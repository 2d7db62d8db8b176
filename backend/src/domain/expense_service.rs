//! Expense service domain logic: validation, identity assignment and
//! delegation to the configured store.

use anyhow::Context;
use shared::{CreateExpenseRequest, Expense};
use std::sync::Arc;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{info, warn};
use uuid::Uuid;

use super::commands::NewExpense;
use super::errors::ExpenseError;
use crate::storage::ExpenseStorage;

#[derive(Clone)]
pub struct ExpenseService {
    repository: Arc<dyn ExpenseStorage>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseStorage>) -> Self {
        Self { repository }
    }

    /// Every stored expense, in the store's natural order
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ExpenseError> {
        let expenses = self.repository.list_expenses().await?;
        info!("Loaded {} expenses", expenses.len());
        Ok(expenses)
    }

    /// Validate, assign identity and timestamps, then persist
    pub async fn create_expense(&self, request: CreateExpenseRequest) -> Result<Expense, ExpenseError> {
        let new_expense = NewExpense::try_from(request)?;

        let now = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("Failed to format creation timestamp")?;

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            date: new_expense.date,
            category: new_expense.category,
            description: new_expense.description,
            amount: new_expense.amount,
            created_at: now.clone(),
            updated_at: now,
        };

        self.repository.store_expense(&expense).await?;
        info!("Created expense {} ({} on {})", expense.id, expense.category, expense.date);

        Ok(expense)
    }

    /// Delete by identity. Succeeds whether or not a record matched.
    pub async fn delete_expense(&self, expense_id: &str) -> Result<(), ExpenseError> {
        let deleted = self.repository.delete_expense(expense_id).await?;
        if deleted {
            info!("Deleted expense {}", expense_id);
        } else {
            warn!("Delete requested for unknown expense {}", expense_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;
    use crate::storage::test_utils::{in_memory_storage, UnavailableStorage};
    use chrono::NaiveDate;
    use shared::AmountInput;

    async fn create_test_service() -> ExpenseService {
        ExpenseService::new(in_memory_storage().await)
    }

    fn lunch_request() -> CreateExpenseRequest {
        CreateExpenseRequest {
            date: Some("2024-05-01".to_string()),
            category: Some("Food".to_string()),
            description: Some("Lunch".to_string()),
            amount: Some(AmountInput::Number(150.0)),
        }
    }

    #[tokio::test]
    async fn test_create_expense_assigns_identity_and_timestamps() {
        let service = create_test_service().await;

        let expense = service.create_expense(lunch_request()).await.unwrap();

        assert!(!expense.id.is_empty());
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 150.0);
        assert!(!expense.created_at.is_empty());
        assert_eq!(expense.created_at, expense.updated_at);
        assert!(time::OffsetDateTime::parse(&expense.created_at, &Rfc3339).is_ok());
    }

    #[tokio::test]
    async fn test_created_expenses_get_distinct_ids() {
        let service = create_test_service().await;

        let first = service.create_expense(lunch_request()).await.unwrap();
        let second = service.create_expense(lunch_request()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_created_expense_is_listed() {
        let service = create_test_service().await;

        let created = service.create_expense(lunch_request()).await.unwrap();
        let listed = service.list_expenses().await.unwrap();

        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_invalid_request_persists_nothing() {
        let service = create_test_service().await;
        let mut request = lunch_request();
        request.description = None;

        let result = service.create_expense(request).await;

        assert!(matches!(
            result,
            Err(ExpenseError::Validation(ValidationError::MissingFields))
        ));
        assert!(service.list_expenses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_expense() {
        let service = create_test_service().await;
        let created = service.create_expense(lunch_request()).await.unwrap();

        service.delete_expense(&created.id).await.unwrap();

        assert!(service.list_expenses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_expense_succeeds() {
        let service = create_test_service().await;

        assert!(service.delete_expense("no-such-expense").await.is_ok());
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_persistence_errors() {
        let service = ExpenseService::new(Arc::new(UnavailableStorage));

        assert!(matches!(service.list_expenses().await, Err(ExpenseError::Persistence(_))));
        assert!(matches!(service.create_expense(lunch_request()).await, Err(ExpenseError::Persistence(_))));
        assert!(matches!(service.delete_expense("any").await, Err(ExpenseError::Persistence(_))));
    }

    #[tokio::test]
    async fn test_validation_runs_before_store_is_touched() {
        let service = ExpenseService::new(Arc::new(UnavailableStorage));

        let result = service.create_expense(CreateExpenseRequest::default()).await;

        assert!(matches!(result, Err(ExpenseError::Validation(_))));
    }
}
