//! Calendar-window filters over the in-memory expense list.
//!
//! "Today" is always supplied by the caller so the filters stay pure and can
//! be exercised with fixed dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::Expense;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// The three mutually exclusive summary views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[default]
    Today,
    ThisMonth,
    ThisYear,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Today, Period::ThisMonth, Period::ThisYear];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::ThisMonth => "This Month",
            Period::ThisYear => "This Year",
        }
    }

    /// Whether `date` falls inside this period relative to `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::Today => date == today,
            Period::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            Period::ThisYear => date.year() == today.year(),
        }
    }
}

/// Records whose date falls inside `period`
pub fn filter_by_period(expenses: &[Expense], period: Period, today: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| period.contains(expense.date, today))
        .cloned()
        .collect()
}

/// Records dated exactly `day`
pub fn records_on_day(expenses: &[Expense], day: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| expense.date == day)
        .cloned()
        .collect()
}

/// Records in `month` (1-12) of `year`
pub fn records_in_month(expenses: &[Expense], month: u32, year: i32) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| expense.date.month() == month && expense.date.year() == year)
        .cloned()
        .collect()
}

/// English name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "January",
    }
}

/// The pair of months chosen in the month-vs-month selectors.
///
/// Both months always belong to the current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSelection {
    pub first: u32,
    pub second: u32,
}

impl MonthSelection {
    /// Current month against the month before it.
    ///
    /// January pairs with December of the same year, since comparisons never
    /// leave the current year.
    pub fn default_for(today: NaiveDate) -> Self {
        let current = today.month();
        let previous = if current == 1 { 12 } else { current - 1 };
        Self {
            first: current,
            second: previous,
        }
    }

    /// `(month number, "<Month> <year>")` for every month of `year`
    pub fn options(year: i32) -> Vec<(u32, String)> {
        (1..=12)
            .map(|month| (month, format!("{} {}", month_name(month), year)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::tests::expense;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("2024-05-14", "Food", 10.0),
            expense("2024-05-02", "Transport", 20.0),
            expense("2024-03-30", "Bills", 30.0),
            expense("2023-05-14", "Food", 40.0),
        ]
    }

    #[test]
    fn test_today_filter() {
        let filtered = filter_by_period(&sample(), Period::Today, date("2024-05-14"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].amount, 10.0);
    }

    #[test]
    fn test_month_filter_ignores_same_month_of_other_years() {
        let filtered = filter_by_period(&sample(), Period::ThisMonth, date("2024-05-20"));
        let amounts: Vec<f64> = filtered.iter().map(|e| e.amount).collect();

        assert_eq!(amounts, vec![10.0, 20.0]);
    }

    #[test]
    fn test_year_filter() {
        let filtered = filter_by_period(&sample(), Period::ThisYear, date("2024-12-31"));

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|e| e.date.year() == 2024));
    }

    #[test]
    fn test_filters_on_empty_list() {
        for period in Period::ALL {
            assert!(filter_by_period(&[], period, date("2024-05-14")).is_empty());
        }
    }

    #[test]
    fn test_records_on_day_and_in_month() {
        let expenses = sample();

        assert_eq!(records_on_day(&expenses, date("2024-05-02")).len(), 1);
        assert_eq!(records_on_day(&expenses, date("2024-05-03")).len(), 0);
        assert_eq!(records_in_month(&expenses, 5, 2024).len(), 2);
        assert_eq!(records_in_month(&expenses, 5, 2023).len(), 1);
    }

    #[test]
    fn test_default_month_selection() {
        let selection = MonthSelection::default_for(date("2024-05-14"));

        assert_eq!(selection, MonthSelection { first: 5, second: 4 });
    }

    #[test]
    fn test_default_month_selection_wraps_january() {
        let selection = MonthSelection::default_for(date("2025-01-03"));

        assert_eq!(selection, MonthSelection { first: 1, second: 12 });
    }

    #[test]
    fn test_month_options_label_current_year() {
        let options = MonthSelection::options(2024);

        assert_eq!(options.len(), 12);
        assert_eq!(options[0], (1, "January 2024".to_string()));
        assert_eq!(options[11], (12, "December 2024".to_string()));
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(Period::default(), Period::Today);
        assert_eq!(Period::ThisMonth.label(), "This Month");
    }
}
