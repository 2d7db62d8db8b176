use chrono::{Datelike, NaiveDate};
use shared::{compare_months, Comparison, Expense, MonthSelection};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::charts::BarChart;

#[derive(Properties, PartialEq)]
pub struct MonthComparisonProps {
    pub expenses: Vec<Expense>,
    pub today: NaiveDate,
}

fn month_from_select(e: &Event) -> Option<u32> {
    e.target_unchecked_into::<HtmlSelectElement>().value().parse().ok()
}

/// Two month pickers over the current year, defaulting to this month and the one before
#[function_component(MonthComparison)]
pub fn month_comparison(props: &MonthComparisonProps) -> Html {
    let today = props.today;
    let selection = use_state(|| MonthSelection::default_for(today));
    let comparison = use_state(|| None::<Comparison>);
    let options = MonthSelection::options(today.year());

    let on_first = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            if let Some(first) = month_from_select(&e) {
                selection.set(MonthSelection { first, ..*selection });
            }
        })
    };
    let on_second = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            if let Some(second) = month_from_select(&e) {
                selection.set(MonthSelection { second, ..*selection });
            }
        })
    };

    let on_compare = {
        let expenses = props.expenses.clone();
        let selection = selection.clone();
        let comparison = comparison.clone();
        Callback::from(move |_: MouseEvent| {
            comparison.set(Some(compare_months(&expenses, selection.first, selection.second, today.year())));
        })
    };

    let render_select = |id: &'static str, selected: u32, onchange: Callback<Event>| {
        html! {
            <select {id} {onchange}>
                {for options.iter().map(|(month, label)| html! {
                    <option value={month.to_string()} selected={*month == selected}>{label}</option>
                })}
            </select>
        }
    };

    html! {
        <section class="card compare">
            <h2>{"Compare Two Months"}</h2>
            <div class="form-row">
                {render_select("month1", selection.first, on_first)}
                {render_select("month2", selection.second, on_second)}
                <button type="button" id="compareMonthBtn" onclick={on_compare}>{"Compare"}</button>
            </div>
            {match (*comparison).as_ref() {
                Some(comparison) => html! {
                    <>
                        <BarChart comparison={comparison.clone()} />
                        <p id="compareMonthResult" class="compare-result">{comparison.message()}</p>
                    </>
                },
                None => html! {},
            }}
        </section>
    }
}
