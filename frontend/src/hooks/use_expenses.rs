use std::rc::Rc;

use chrono::NaiveDate;
use shared::{filter_by_period, Expense, Period};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

/// Everything the page knows about expenses. Records are fetched once and
/// only ever appended to afterwards. A record added before the initial fetch
/// lands is kept when the fetch result arrives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseState {
    pub expenses: Vec<Expense>,
    pub period: Period,
    pub loading: bool,
    pub load_error: Option<String>,
}

pub enum ExpenseAction {
    Loaded(Vec<Expense>),
    LoadFailed(String),
    Added(Expense),
    SelectPeriod(Period),
}

impl Reducible for ExpenseState {
    type Action = ExpenseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ExpenseAction::Loaded(expenses) => {
                let pending: Vec<Expense> = next
                    .expenses
                    .drain(..)
                    .filter(|held| !expenses.iter().any(|fetched| fetched.id == held.id))
                    .collect();
                next.expenses = expenses;
                next.expenses.extend(pending);
                next.loading = false;
                next.load_error = None;
                next.period = Period::Today;
            }
            ExpenseAction::LoadFailed(error) => {
                next.loading = false;
                next.load_error = Some(error);
            }
            ExpenseAction::Added(expense) => {
                next.expenses.push(expense);
                next.period = Period::Today;
            }
            ExpenseAction::SelectPeriod(period) => {
                next.period = period;
            }
        }
        Rc::new(next)
    }
}

impl ExpenseState {
    fn initial() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Records inside the active period
    pub fn visible(&self, today: NaiveDate) -> Vec<Expense> {
        filter_by_period(&self.expenses, self.period, today)
    }
}

pub struct UseExpensesResult {
    pub state: UseReducerHandle<ExpenseState>,
    pub actions: UseExpensesActions,
}

#[derive(Clone)]
pub struct UseExpensesActions {
    pub select_period: Callback<Period>,
    pub expense_added: Callback<Expense>,
}

/// Loads all expenses on mount and exposes the state plus its actions
#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let state = use_reducer(ExpenseState::initial);

    {
        let state = state.clone();
        let api_client = api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.list_expenses().await {
                    Ok(expenses) => {
                        Logger::info_with_component("use_expenses", &format!("Loaded {} expenses", expenses.len()));
                        state.dispatch(ExpenseAction::Loaded(expenses));
                    }
                    Err(e) => {
                        Logger::error_with_component("use_expenses", &e);
                        state.dispatch(ExpenseAction::LoadFailed(e));
                    }
                }
            });
            || ()
        });
    }

    let select_period = {
        let state = state.clone();
        Callback::from(move |period: Period| state.dispatch(ExpenseAction::SelectPeriod(period)))
    };

    let expense_added = {
        let state = state.clone();
        Callback::from(move |expense: Expense| state.dispatch(ExpenseAction::Added(expense)))
    };

    UseExpensesResult {
        state,
        actions: UseExpensesActions {
            select_period,
            expense_added,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, date: NaiveDate, category: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date,
            category: category.to_string(),
            description: "test".to_string(),
            amount,
            created_at: "2024-05-01T00:00:00Z".to_string(),
            updated_at: "2024-05-01T00:00:00Z".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_initial_state_is_loading_today() {
        let state = ExpenseState::initial();
        assert!(state.loading);
        assert_eq!(state.period, Period::Today);
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn test_loaded_replaces_records_and_shows_today() {
        let state = Rc::new(ExpenseState::initial())
            .reduce(ExpenseAction::SelectPeriod(Period::ThisYear))
            .reduce(ExpenseAction::Loaded(vec![expense("a", day(2024, 5, 1), "Food", 10.0)]));

        assert!(!state.loading);
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.period, Period::Today);
    }

    #[test]
    fn test_load_failure_leaves_view_empty() {
        let state = Rc::new(ExpenseState::initial()).reduce(ExpenseAction::LoadFailed("offline".to_string()));

        assert!(!state.loading);
        assert!(state.expenses.is_empty());
        assert_eq!(state.load_error.as_deref(), Some("offline"));
    }

    #[test]
    fn test_added_appends_without_refetch_and_returns_to_today() {
        let state = Rc::new(ExpenseState::initial())
            .reduce(ExpenseAction::Loaded(vec![expense("a", day(2024, 5, 1), "Food", 10.0)]))
            .reduce(ExpenseAction::SelectPeriod(Period::ThisMonth))
            .reduce(ExpenseAction::Added(expense("b", day(2024, 5, 2), "Transport", 5.0)));

        let ids: Vec<&str> = state.expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(state.period, Period::Today);
    }

    #[test]
    fn test_record_added_before_load_survives_the_load() {
        let state = Rc::new(ExpenseState::initial())
            .reduce(ExpenseAction::Added(expense("new", day(2024, 5, 2), "Transport", 5.0)))
            .reduce(ExpenseAction::Loaded(vec![expense("old", day(2024, 5, 1), "Food", 10.0)]));

        let ids: Vec<&str> = state.expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "new"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_load_that_already_contains_added_record_keeps_one_copy() {
        let state = Rc::new(ExpenseState::initial())
            .reduce(ExpenseAction::Added(expense("new", day(2024, 5, 2), "Transport", 5.0)))
            .reduce(ExpenseAction::Loaded(vec![
                expense("old", day(2024, 5, 1), "Food", 10.0),
                expense("new", day(2024, 5, 2), "Transport", 5.0),
            ]));

        let ids: Vec<&str> = state.expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "new"]);
    }

    #[test]
    fn test_visible_follows_selected_period() {
        let today = day(2024, 5, 15);
        let state = Rc::new(ExpenseState::initial()).reduce(ExpenseAction::Loaded(vec![
            expense("today", today, "Food", 10.0),
            expense("month", day(2024, 5, 2), "Food", 20.0),
            expense("year", day(2024, 1, 9), "Rent", 30.0),
            expense("old", day(2023, 5, 15), "Rent", 40.0),
        ]));

        let ids = |state: &ExpenseState| -> Vec<String> {
            state.visible(today).into_iter().map(|e| e.id).collect()
        };

        assert_eq!(ids(&state), vec!["today"]);
        let state = state.reduce(ExpenseAction::SelectPeriod(Period::ThisMonth));
        assert_eq!(ids(&state), vec!["today", "month"]);
        let state = state.reduce(ExpenseAction::SelectPeriod(Period::ThisYear));
        assert_eq!(ids(&state), vec!["today", "month", "year"]);
    }
}
