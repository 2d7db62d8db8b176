//! Category grouping and summary figures over a set of expenses.
//!
//! Everything here is pure: callers pass in the records they want summarized
//! (usually the output of a period filter) and get plain values back.

use serde::{Deserialize, Serialize};

use crate::Expense;

/// Summed amount for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Category → summed amount, kept in order of first occurrence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `category`, appending the category if it is new
    pub fn add(&mut self, category: &str, amount: f64) {
        match self.entries.iter_mut().find(|entry| entry.category == category) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    /// Summed amount for `category`, if any record carried that label
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
    }

    /// Summed amount for `category`, zero when absent
    pub fn amount_or_zero(&self, category: &str) -> f64 {
        self.get(category).unwrap_or(0.0)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.category.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().fold(0.0, |sum, entry| sum + entry.amount)
    }

    /// Category with the largest total. Ties go to the category seen first.
    pub fn top_category(&self) -> Option<&str> {
        let mut top: Option<&CategoryTotal> = None;
        for entry in &self.entries {
            match top {
                Some(current) if entry.amount <= current.amount => {}
                _ => top = Some(entry),
            }
        }
        top.map(|entry| entry.category.as_str())
    }
}

/// Group expenses by category label and sum their amounts
pub fn group_by_category<'a, I>(expenses: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = CategoryTotals::new();
    for expense in expenses {
        totals.add(&expense.category, expense.amount);
    }
    totals
}

/// Sum of every amount in `expenses`
pub fn total_spent<'a, I>(expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().fold(0.0, |sum, expense| sum + expense.amount)
}

/// Format a rupee amount with two decimals, e.g. `₹120.00`.
/// Anything that rounds to zero prints as `₹0.00`, never `₹-0.00`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.abs() < 0.005 { 0.0 } else { amount };
    format!("₹{:.2}", amount)
}

/// Figures shown in the summary panel for the selected period
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub total: f64,
    pub top_category: Option<String>,
}

impl SpendingSummary {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let totals = group_by_category(expenses);
        Self {
            total: total_spent(expenses),
            top_category: totals.top_category().map(str::to_string),
        }
    }

    pub fn formatted_total(&self) -> String {
        format_currency(self.total)
    }

    /// Top category label, or an em dash when there is nothing to show
    pub fn top_category_label(&self) -> &str {
        self.top_category.as_deref().unwrap_or("—")
    }
}
