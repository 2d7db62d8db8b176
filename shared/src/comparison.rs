//! Side-by-side spending comparison of two days or two months.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregation::{format_currency, group_by_category};
use crate::period::{month_name, records_in_month, records_on_day};
use crate::Expense;

/// What the two compared periods are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonKind {
    Days,
    Months,
}

/// One side of a comparison: a label and a value per shared category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ComparisonVerdict {
    Equal,
    /// First period spent more, by the contained (positive) difference
    FirstHigher(f64),
    /// Second period spent more, by the contained (positive) difference
    SecondHigher(f64),
}

impl ComparisonVerdict {
    /// Totals that differ by less than half a paisa are treated as equal
    fn from_totals(first: f64, second: f64) -> Self {
        let difference = first - second;
        if difference.abs() < 0.005 {
            ComparisonVerdict::Equal
        } else if difference > 0.0 {
            ComparisonVerdict::FirstHigher(difference)
        } else {
            ComparisonVerdict::SecondHigher(-difference)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub kind: ComparisonKind,
    /// Union of categories from both periods, first period's order first
    pub categories: Vec<String>,
    pub first: ComparisonSeries,
    pub second: ComparisonSeries,
    pub verdict: ComparisonVerdict,
}

impl Comparison {
    fn build(
        kind: ComparisonKind,
        first_label: String,
        first_records: &[Expense],
        second_label: String,
        second_records: &[Expense],
    ) -> Self {
        let first_totals = group_by_category(first_records);
        let second_totals = group_by_category(second_records);

        let mut categories: Vec<String> = first_totals.categories().map(str::to_string).collect();
        for category in second_totals.categories() {
            if !categories.iter().any(|existing| existing == category) {
                categories.push(category.to_string());
            }
        }

        let first_values: Vec<f64> = categories
            .iter()
            .map(|category| first_totals.amount_or_zero(category))
            .collect();
        let second_values: Vec<f64> = categories
            .iter()
            .map(|category| second_totals.amount_or_zero(category))
            .collect();

        let first_total = first_values.iter().fold(0.0, |sum, value| sum + value);
        let second_total = second_values.iter().fold(0.0, |sum, value| sum + value);

        Self {
            kind,
            categories,
            first: ComparisonSeries {
                label: first_label,
                values: first_values,
                total: first_total,
            },
            second: ComparisonSeries {
                label: second_label,
                values: second_values,
                total: second_total,
            },
            verdict: ComparisonVerdict::from_totals(first_total, second_total),
        }
    }

    /// Sentence shown under the comparison chart
    pub fn message(&self) -> String {
        match (self.kind, self.verdict) {
            (ComparisonKind::Days, ComparisonVerdict::Equal) => "Both days had equal spending".to_string(),
            (ComparisonKind::Months, ComparisonVerdict::Equal) => "Both months had equal spending".to_string(),
            (ComparisonKind::Days, ComparisonVerdict::FirstHigher(diff)) => {
                format!("You spent {} more on {}", format_currency(diff), self.first.label)
            }
            (ComparisonKind::Days, ComparisonVerdict::SecondHigher(diff)) => {
                format!("You spent {} more on {}", format_currency(diff), self.second.label)
            }
            (ComparisonKind::Months, ComparisonVerdict::FirstHigher(diff)) => {
                format!("{} had {} more expenses", self.first.label, format_currency(diff))
            }
            (ComparisonKind::Months, ComparisonVerdict::SecondHigher(diff)) => {
                format!("{} had {} more expenses", self.second.label, format_currency(diff))
            }
        }
    }
}

/// Compare spending on two calendar days
pub fn compare_days(expenses: &[Expense], first: NaiveDate, second: NaiveDate) -> Comparison {
    Comparison::build(
        ComparisonKind::Days,
        first.format("%Y-%m-%d").to_string(),
        &records_on_day(expenses, first),
        second.format("%Y-%m-%d").to_string(),
        &records_on_day(expenses, second),
    )
}

/// Compare spending in two months (1-12) of the same `year`
pub fn compare_months(expenses: &[Expense], first: u32, second: u32, year: i32) -> Comparison {
    Comparison::build(
        ComparisonKind::Months,
        month_name(first).to_string(),
        &records_in_month(expenses, first, year),
        month_name(second).to_string(),
        &records_in_month(expenses, second, year),
    )
}
