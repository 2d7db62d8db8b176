//! # Domain Module
//!
//! Business rules for expense records, independent of HTTP and of the
//! storage engine.
//!
//! - **commands**: validated input types built from API requests
//! - **errors**: validation and persistence error taxonomy
//! - **expense_service**: list / create / delete orchestration
//!
//! Aggregation (grouping, totals, comparisons) is not done here; the
//! frontend computes it from the full record list using the `shared` crate.

pub mod commands;
pub mod errors;
pub mod expense_service;

pub use commands::NewExpense;
pub use errors::{ExpenseError, ValidationError};
pub use expense_service::ExpenseService;
