use shared::Transaction;
use yew::prelude::*;

use super::category_chart::CategoryChart;
use super::transaction_table::TransactionTable;

#[derive(Properties, PartialEq)]
pub struct TransactionViewContainerProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub currency_symbol: String,
    pub on_delete: Callback<i64>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ViewType {
    Table,
    Chart,
}

pub enum Msg {
    SwitchToTable,
    SwitchToChart,
}

/// Wraps the transaction table and the category chart behind a pair of
/// toggle buttons.
pub struct TransactionViewContainer {
    current_view: ViewType,
}

impl Component for TransactionViewContainer {
    type Message = Msg;
    type Properties = TransactionViewContainerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            current_view: ViewType::Table,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SwitchToTable => {
                self.current_view = ViewType::Table;
                true
            }
            Msg::SwitchToChart => {
                self.current_view = ViewType::Chart;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="transactions-section">
                <div class="transaction-view-header">
                    <h2>{"Transactions"}</h2>

                    <div class="view-toggle-buttons">
                        <button
                            class={classes!("view-toggle-btn",
                                matches!(self.current_view, ViewType::Table).then_some("active"))}
                            onclick={ctx.link().callback(|_| Msg::SwitchToTable)}
                            title="Table view"
                        >
                            {"Table"}
                        </button>

                        <button
                            class={classes!("view-toggle-btn",
                                matches!(self.current_view, ViewType::Chart).then_some("active"))}
                            onclick={ctx.link().callback(|_| Msg::SwitchToChart)}
                            title="Chart view"
                        >
                            {"Chart"}
                        </button>
                    </div>
                </div>

                {match self.current_view {
                    ViewType::Table => html! {
                        <TransactionTable
                            transactions={ctx.props().transactions.clone()}
                            loading={ctx.props().loading}
                            currency_symbol={ctx.props().currency_symbol.clone()}
                            on_delete={ctx.props().on_delete.clone()}
                        />
                    },
                    ViewType::Chart => html! {
                        <CategoryChart
                            transactions={ctx.props().transactions.clone()}
                            loading={ctx.props().loading}
                        />
                    },
                }}
            </section>
        }
    }
}
