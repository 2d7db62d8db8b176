//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Handlers
//! translate JSON bodies into domain calls and domain errors into status
//! codes with a `{"error": ...}` body.
//!
//! ## Supported Operations
//!
//! - **GET /api/expenses**: every stored expense
//! - **POST /api/expenses**: validate and store a new expense
//! - **DELETE /api/expenses/:id**: remove an expense by identity
//! - **POST /api/logs**: re-emit frontend log lines in the server log

pub mod rest;

pub use rest::*;
