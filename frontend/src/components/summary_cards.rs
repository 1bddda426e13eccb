use shared::Summary;
use yew::prelude::*;

use super::format_money;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Summary,
    pub currency_symbol: String,
}

/// Income, expense and net balance cards. Values arrive as numbers and are
/// only formatted here, at the edge.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let net_class = classes!(
        "summary-card",
        "net",
        (props.summary.net_balance < 0.0).then_some("negative")
    );

    html! {
        <section class="summary-section">
            <div class="summary-card income">
                <span class="summary-label">{"Total Income"}</span>
                <span class="summary-value">
                    {format_money(props.summary.total_income, &props.currency_symbol)}
                </span>
            </div>
            <div class="summary-card expense">
                <span class="summary-label">{"Total Expense"}</span>
                <span class="summary-value">
                    {format_money(props.summary.total_expense, &props.currency_symbol)}
                </span>
            </div>
            <div class={net_class}>
                <span class="summary-label">{"Net Balance"}</span>
                <span class="summary-value">
                    {format_money(props.summary.net_balance, &props.currency_symbol)}
                </span>
            </div>
        </section>
    }
}
