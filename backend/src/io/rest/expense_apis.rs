//! # REST API for Expenses
//!
//! Endpoints for listing, creating and deleting expense records.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info, warn};

use crate::domain::ExpenseError;
use crate::AppState;
use shared::{CreateExpenseRequest, DeleteExpenseResponse, ErrorResponse};

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// List every stored expense
pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");

    match state.expense_service.list_expenses().await {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(e) => {
            error!("Failed to list expenses: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch expenses")
        }
    }
}

/// Create a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    payload: Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("POST /api/expenses - rejected body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    info!("POST /api/expenses - request: {:?}", request);

    match state.expense_service.create_expense(request).await {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(ExpenseError::Validation(e)) => {
            warn!("Rejected expense: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            error!("Failed to create expense: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to add expense")
        }
    }
}

/// Delete an expense by id. Unknown ids still answer 200.
pub async fn delete_expense(State(state): State<AppState>, Path(expense_id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", expense_id);

    match state.expense_service.delete_expense(&expense_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteExpenseResponse {
                message: "Expense deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete expense {}: {}", expense_id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete expense")
        }
    }
}
