//! Domain-level command types.
//!
//! The REST layer receives loosely-typed [`CreateExpenseRequest`] bodies;
//! services turn them into a [`NewExpense`] before anything is persisted.

use chrono::{DateTime, NaiveDate};
use shared::{AmountInput, CreateExpenseRequest};

use super::errors::ValidationError;

/// A validated, coerced expense ready to be assigned an identity
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

impl TryFrom<CreateExpenseRequest> for NewExpense {
    type Error = ValidationError;

    fn try_from(request: CreateExpenseRequest) -> Result<Self, Self::Error> {
        let date = present(request.date).ok_or(ValidationError::MissingFields)?;
        let category = present(request.category).ok_or(ValidationError::MissingFields)?;
        let description = present(request.description).ok_or(ValidationError::MissingFields)?;
        let amount = request.amount.ok_or(ValidationError::MissingFields)?;

        Ok(Self {
            date: parse_date(&date)?,
            category,
            description,
            amount: parse_amount(amount)?,
        })
    }
}

/// Trimmed value, or None when absent or blank
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date is kept)
fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn parse_amount(amount: AmountInput) -> Result<f64, ValidationError> {
    let value = match amount {
        AmountInput::Number(value) => value,
        AmountInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::MissingFields);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidAmount(text.clone()))?
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::InvalidAmount(value.to_string()))
    }
}
