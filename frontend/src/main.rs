mod components;
mod hooks;
mod services;

use shared::{group_by_category, SpendingSummary};
use yew::prelude::*;

use components::{AddExpenseForm, DayComparison, MonthComparison, PeriodFilter, PieChart, SummaryPanel};
use hooks::use_expenses;
use services::{date_utils, ApiClient};

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let expenses = use_expenses(&api_client);
    let state = &*expenses.state;

    let today = date_utils::today();
    let visible = state.visible(today);
    let totals = group_by_category(&visible);
    let summary = SpendingSummary::from_expenses(&visible);

    html! {
        <div class="container">
            <header>
                <h1>{"Expense Tracker"}</h1>
            </header>

            <AddExpenseForm api_client={(*api_client).clone()} on_created={expenses.actions.expense_added.clone()} />

            <section class="card overview">
                <h2>{"Spending Overview"}</h2>
                <PeriodFilter active={state.period} on_select={expenses.actions.select_period.clone()} />
                {if state.loading {
                    html! { <p class="loading">{"Loading expenses..."}</p> }
                } else if let Some(error) = state.load_error.as_ref() {
                    html! { <p class="form-message error">{format!("Could not load expenses: {}", error)}</p> }
                } else {
                    html! {}
                }}
                <PieChart {totals} />
                <SummaryPanel {summary} />
            </section>

            <DayComparison expenses={state.expenses.clone()} />
            <MonthComparison expenses={state.expenses.clone()} {today} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
