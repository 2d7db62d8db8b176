use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::Expense;
use sqlx::{sqlite::SqliteRow, Row};

use super::connection::DbConnection;
use super::traits::ExpenseStorage;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed expense repository
#[derive(Clone)]
pub struct ExpenseRepository {
    db: DbConnection,
}

impl ExpenseRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_expense(row: &SqliteRow) -> Result<Expense> {
        let raw_date: String = row.get("date");
        let date = NaiveDate::parse_from_str(&raw_date, DATE_FORMAT)
            .with_context(|| format!("Stored expense has malformed date '{}'", raw_date))?;

        Ok(Expense {
            id: row.get("id"),
            date,
            category: row.get("category"),
            description: row.get("description"),
            amount: row.get("amount"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl ExpenseStorage for ExpenseRepository {
    async fn list_expenses(&self) -> Result<Vec<Expense>> {
        let rows = sqlx::query(
            r#"
            SELECT id, date, category, description, amount, created_at, updated_at
            FROM expenses
            ORDER BY ROWID ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_expense).collect()
    }

    async fn store_expense(&self, expense: &Expense) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, date, category, description, amount, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&expense.id)
        .bind(expense.date.format(DATE_FORMAT).to_string())
        .bind(&expense.category)
        .bind(&expense.description)
        .bind(expense.amount)
        .bind(&expense.created_at)
        .bind(&expense.updated_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(expense_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> ExpenseRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ExpenseRepository::new(db)
    }

    fn sample_expense(id: &str, date: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
            category: category.to_string(),
            description: format!("{} purchase", category),
            amount,
            created_at: "2024-05-01T08:30:00Z".to_string(),
            updated_at: "2024-05-01T08:30:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_and_list_expenses() {
        let repo = setup_test().await;

        let first = sample_expense("exp-1", "2024-05-01", "Food", 100.0);
        let second = sample_expense("exp-2", "2024-05-02", "Transport", 30.0);
        repo.store_expense(&first).await.expect("Failed to store expense");
        repo.store_expense(&second).await.expect("Failed to store expense");

        let listed = repo.list_expenses().await.expect("Failed to list expenses");

        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = setup_test().await;

        for (id, date) in [("c", "2024-05-03"), ("a", "2024-05-01"), ("b", "2024-05-02")] {
            repo.store_expense(&sample_expense(id, date, "Food", 1.0)).await.unwrap();
        }

        let ids: Vec<String> = repo.list_expenses().await.unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = setup_test().await;
        assert!(repo.list_expenses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_and_zero_amounts_round_trip() {
        let repo = setup_test().await;

        repo.store_expense(&sample_expense("refund", "2024-05-01", "Refund", -25.5)).await.unwrap();
        repo.store_expense(&sample_expense("free", "2024-05-01", "Gift", 0.0)).await.unwrap();

        let amounts: Vec<f64> = repo.list_expenses().await.unwrap().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![-25.5, 0.0]);
    }

    #[tokio::test]
    async fn test_delete_expense() {
        let repo = setup_test().await;
        repo.store_expense(&sample_expense("to-delete", "2024-05-01", "Food", 10.0)).await.unwrap();
        repo.store_expense(&sample_expense("to-keep", "2024-05-01", "Food", 20.0)).await.unwrap();

        let deleted = repo.delete_expense("to-delete").await.expect("Failed to delete");
        assert!(deleted, "Expense should have been deleted");

        let remaining = repo.list_expenses().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "to-keep");

        let deleted_again = repo.delete_expense("to-delete").await.expect("Failed to re-delete");
        assert!(!deleted_again, "Expense should not exist to be deleted");
    }

    #[tokio::test]
    async fn test_duplicate_id_is_a_storage_error() {
        let repo = setup_test().await;
        let expense = sample_expense("dup", "2024-05-01", "Food", 10.0);

        repo.store_expense(&expense).await.unwrap();
        assert!(repo.store_expense(&expense).await.is_err());
    }
}
