use shared::SpendingSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub summary: SpendingSummary,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    html! {
        <div id="summary-content" class="summary">
            <p><strong>{"Total Spent: "}</strong>{props.summary.formatted_total()}</p>
            <p><strong>{"Top Category: "}</strong>{props.summary.top_category_label()}</p>
        </div>
    }
}
