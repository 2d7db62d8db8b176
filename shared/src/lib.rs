use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod aggregation;
pub mod comparison;
pub mod period;

pub use aggregation::{format_currency, group_by_category, total_spent, CategoryTotal, CategoryTotals, SpendingSummary};
pub use comparison::{compare_days, compare_months, Comparison, ComparisonKind, ComparisonSeries, ComparisonVerdict};
pub use period::{filter_by_period, month_name, records_in_month, records_on_day, MonthSelection, Period};

/// A single persisted expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Identity assigned by the store on creation
    pub id: String,
    /// Calendar date the money was spent (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Free-text category label
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Amount in rupees; the sign is not constrained
    pub amount: f64,
    /// RFC 3339 timestamp set by the store
    pub created_at: String,
    /// RFC 3339 timestamp set by the store
    pub updated_at: String,
}

/// Body of POST /api/expenses.
///
/// Every field is optional on the wire so that a missing field can be
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    /// `YYYY-MM-DD` or a full RFC 3339 timestamp
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<AmountInput>,
}

/// Amount as submitted by a client: either a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

/// Acknowledgment returned by DELETE /api/expenses/:id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    pub message: String,
}

/// JSON error body returned with every 4xx/5xx from the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Log line forwarded by the frontend to POST /api/logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
