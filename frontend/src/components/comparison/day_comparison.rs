use chrono::NaiveDate;
use shared::{compare_days, Comparison, Expense};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::charts::BarChart;
use crate::services::date_utils::parse_input_date;

/// Both picker values as dates, or `None` if either one is unset
pub fn selected_days(first: &str, second: &str) -> Option<(NaiveDate, NaiveDate)> {
    Some((parse_input_date(first)?, parse_input_date(second)?))
}

#[derive(Properties, PartialEq)]
pub struct DayComparisonProps {
    pub expenses: Vec<Expense>,
}

#[function_component(DayComparison)]
pub fn day_comparison(props: &DayComparisonProps) -> Html {
    let first = use_state(String::new);
    let second = use_state(String::new);
    let comparison = use_state(|| None::<Comparison>);

    let on_first = {
        let first = first.clone();
        Callback::from(move |e: InputEvent| first.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_second = {
        let second = second.clone();
        Callback::from(move |e: InputEvent| second.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };

    let on_compare = {
        let expenses = props.expenses.clone();
        let first = first.clone();
        let second = second.clone();
        let comparison = comparison.clone();
        Callback::from(move |_: MouseEvent| match selected_days(&first, &second) {
            Some((day1, day2)) => comparison.set(Some(compare_days(&expenses, day1, day2))),
            None => gloo::dialogs::alert("Please select both dates."),
        })
    };

    html! {
        <section class="card compare">
            <h2>{"Compare Two Days"}</h2>
            <div class="form-row">
                <input type="date" id="compareDate1" value={(*first).clone()} oninput={on_first} />
                <input type="date" id="compareDate2" value={(*second).clone()} oninput={on_second} />
                <button type="button" id="compareBtn" onclick={on_compare}>{"Compare"}</button>
            </div>
            {match (*comparison).as_ref() {
                Some(comparison) => html! {
                    <>
                        <BarChart comparison={comparison.clone()} />
                        <p id="compareResult" class="compare-result">{comparison.message()}</p>
                    </>
                },
                None => html! {},
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_days_required() {
        assert_eq!(selected_days("2024-05-01", ""), None);
        assert_eq!(selected_days("", "2024-05-02"), None);
        assert_eq!(selected_days("", ""), None);
    }

    #[test]
    fn test_selected_days_in_picker_order() {
        assert_eq!(
            selected_days("2024-05-02", "2024-05-01"),
            Some((
                NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
            ))
        );
    }
}
