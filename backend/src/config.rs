//! Runtime configuration read from the process environment.
//!
//! `main` loads an optional `.env` file with `dotenvy` before calling
//! [`Config::from_env`], so the same variables can live in either place.

use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:expenses.db";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got '{0}'")]
    InvalidPort(String),
    #[error("CORS_ORIGIN is not a valid header value: '{0}'")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the expense store
    pub database_url: String,
    pub port: u16,
    /// Directory holding the built frontend (index.html, wasm, styles)
    pub static_dir: PathBuf,
    /// Origin allowed to call the API from a separate dev server
    pub cors_origin: HeaderValue,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or blank keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or(ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let origin = get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))?;

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())),
            cors_origin,
        })
    }
}
