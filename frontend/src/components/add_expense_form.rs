use shared::{AmountInput, CreateExpenseRequest, Expense};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

/// Numbers go over the wire as numbers; anything else is left for the
/// server to reject with a readable message.
pub fn amount_input(raw: &str) -> AmountInput {
    match raw.trim().parse::<f64>() {
        Ok(value) => AmountInput::Number(value),
        Err(_) => AmountInput::Text(raw.to_string()),
    }
}

#[derive(Properties, PartialEq)]
pub struct AddExpenseFormProps {
    pub api_client: ApiClient,
    pub on_created: Callback<Expense>,
}

fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[function_component(AddExpenseForm)]
pub fn add_expense_form(props: &AddExpenseFormProps) -> Html {
    let date = use_state(String::new);
    let category = use_state(String::new);
    let description = use_state(String::new);
    let amount = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    let onsubmit = {
        let api_client = props.api_client.clone();
        let on_created = props.on_created.clone();
        let date = date.clone();
        let category = category.clone();
        let description = description.clone();
        let amount = amount.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = CreateExpenseRequest {
                date: Some((*date).clone()),
                category: Some((*category).clone()),
                description: Some((*description).clone()),
                amount: Some(amount_input(&amount)),
            };

            let api_client = api_client.clone();
            let on_created = on_created.clone();
            let date = date.clone();
            let category = category.clone();
            let description = description.clone();
            let amount = amount.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();

            submitting.set(true);
            form_error.set(None);

            spawn_local(async move {
                match api_client.create_expense(&request).await {
                    Ok(expense) => {
                        Logger::info_with_component("add_expense_form", &format!("Added expense {}", expense.id));
                        date.set(String::new());
                        category.set(String::new());
                        description.set(String::new());
                        amount.set(String::new());
                        on_created.emit(expense);
                    }
                    Err(message) => {
                        Logger::warn_with_component("add_expense_form", &message);
                        form_error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="card add-expense">
            <h2>{"Add Expense"}</h2>
            <form id="expense-form" {onsubmit}>
                <div class="form-row">
                    <input type="date" id="date" value={(*date).clone()} oninput={bind_input(&date)} required=true />
                    <input type="text" id="category" placeholder="Category" value={(*category).clone()} oninput={bind_input(&category)} required=true />
                </div>
                <div class="form-row">
                    <input type="text" id="description" placeholder="Description" value={(*description).clone()} oninput={bind_input(&description)} required=true />
                    <input type="number" id="amount" step="0.01" placeholder="Amount (₹)" value={(*amount).clone()} oninput={bind_input(&amount)} required=true />
                </div>
                <button type="submit" disabled={*submitting}>
                    {if *submitting { "Saving..." } else { "Add Expense" }}
                </button>
            </form>
            {if let Some(error) = (*form_error).as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}
        </section>
    }
}
