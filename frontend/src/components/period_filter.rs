use shared::Period;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PeriodFilterProps {
    pub active: Period,
    pub on_select: Callback<Period>,
}

/// Today / This Month / This Year toggle; exactly one button is active
#[function_component(PeriodFilter)]
pub fn period_filter(props: &PeriodFilterProps) -> Html {
    html! {
        <div class="filter-bar">
            {for Period::ALL.iter().map(|period| {
                let period = *period;
                let on_select = props.on_select.clone();
                let class = classes!("filter-btn", (period == props.active).then_some("active"));
                html! {
                    <button type="button" {class} onclick={Callback::from(move |_| on_select.emit(period))}>
                        {period.label()}
                    </button>
                }
            })}
        </div>
    }
}
