//! # Expense Tracker Backend
//!
//! HTTP service that stores expense records and serves the built frontend.
//!
//! ## Architecture
//!
//! ```text
//! Browser (Yew frontend)
//!     ↓
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (validation, identity, timestamps)
//!     ↓
//! Storage Layer (SQLite via sqlx)
//! ```
//!
//! The backend never aggregates. It hands out the full record list and the
//! frontend groups, filters and compares it.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::Config;
use crate::domain::ExpenseService;
use crate::storage::{DbConnection, ExpenseRepository};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
}

/// Connect to the store and wire up the services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up domain model");
    let expense_service = ExpenseService::new(Arc::new(ExpenseRepository::new(db)));

    Ok(AppState { expense_service })
}

/// Create the Axum router: JSON API under `/api`, static frontend everywhere else
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/expenses", get(io::list_expenses).post(io::create_expense))
        .route("/expenses/:id", delete(io::delete_expense))
        .route("/logs", post(io::log_message));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
