use thiserror::Error;

/// Problems with a create request that the client can fix
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid amount '{0}', expected a number")]
    InvalidAmount(String),
}

#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store could not be reached or rejected the operation
    #[error("Persistence failure: {0}")]
    Persistence(#[from] anyhow::Error),
}
