//! # Storage Module
//!
//! Persistence for expense records. The domain layer depends on the
//! [`ExpenseStorage`] trait only; [`ExpenseRepository`] implements it over a
//! SQLite pool managed by [`DbConnection`].

pub mod connection;
pub mod expense_repository;
pub mod traits;

pub use connection::DbConnection;
pub use expense_repository::ExpenseRepository;
pub use traits::ExpenseStorage;

#[cfg(test)]
pub mod test_utils;
