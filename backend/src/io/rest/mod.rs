//! # REST API Interface Layer
//!
//! Axum handlers for the expense tracker. Each handler logs the request,
//! calls exactly one service operation and maps the outcome to a response.
//! No business rules live here.

pub mod expense_apis;
pub mod logging_apis;

pub use expense_apis::{create_expense, delete_expense, list_expenses};
pub use logging_apis::log_message;
