use yew::prelude::*;

use super::format_money;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub net_balance: f64,
    pub currency_symbol: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let balance_class = classes!(
        "balance-amount",
        (props.net_balance < 0.0).then_some("negative")
    );

    html! {
        <header class="header">
            <div class="container">
                <h1>{"BudgetWise"}</h1>
                <div class="balance-display">
                    <span class="balance-label">{"Net Balance:"}</span>
                    <span class={balance_class}>
                        {format_money(props.net_balance, &props.currency_symbol)}
                    </span>
                </div>
            </div>
        </header>
    }
}
