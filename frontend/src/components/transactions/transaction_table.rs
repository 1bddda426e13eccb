use shared::{sort_for_display, Transaction, TransactionKind};
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub currency_symbol: String,
    /// Invoked with the row's id when its delete button is pressed.
    pub on_delete: Callback<i64>,
}

/// Amount cell text: income shows a leading `+`, expense a leading `-`.
fn signed_amount(transaction: &Transaction, symbol: &str) -> String {
    let value = transaction.amount.or_zero();
    match transaction.kind {
        TransactionKind::Income => format!("+{}{:.2}", symbol, value),
        TransactionKind::Expense => format!("-{}{:.2}", symbol, value),
        TransactionKind::Unknown => format!("{}{:.2}", symbol, value),
    }
}

fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "amount positive",
        TransactionKind::Expense => "amount negative",
        TransactionKind::Unknown => "amount",
    }
}

/// Transaction list, most recent first. Every render rebuilds the whole
/// table from the given list; at personal-finance scale that is cheaper
/// than being clever.
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    if props.loading {
        return html! { <div class="loading">{"Loading transactions..."}</div> };
    }

    let ordered = sort_for_display(&props.transactions);

    if ordered.is_empty() {
        return html! {
            <div class="empty-state">{"No transactions yet. Add your first one above."}</div>
        };
    }

    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Title"}</th>
                        <th>{"Category"}</th>
                        <th>{"Amount"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for ordered.iter().map(|transaction| {
                        let id = transaction.id;
                        let on_delete = props.on_delete.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_delete.emit(id));

                        html! {
                            <tr key={id}>
                                <td class="date">
                                    {date_utils::format_date_for_display(&transaction.date)}
                                </td>
                                <td class="title">{&transaction.title}</td>
                                <td class="category">{&transaction.category}</td>
                                <td class={amount_class(transaction.kind)}>
                                    {signed_amount(transaction, &props.currency_symbol)}
                                </td>
                                <td class="actions">
                                    <button class="delete-btn" {onclick} title="Delete transaction">
                                        {"✕"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Amount;

    fn tx(kind: TransactionKind, amount: &str) -> Transaction {
        Transaction {
            id: 1,
            title: "Lunch".to_string(),
            amount: Amount::new(amount),
            kind,
            category: "Groceries".to_string(),
            date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_signed_amount_by_kind() {
        assert_eq!(
            signed_amount(&tx(TransactionKind::Income, "1000.50"), "$"),
            "+$1000.50"
        );
        assert_eq!(
            signed_amount(&tx(TransactionKind::Expense, "250"), "$"),
            "-$250.00"
        );
        assert_eq!(
            signed_amount(&tx(TransactionKind::Unknown, "5"), "$"),
            "$5.00"
        );
    }

    #[test]
    fn test_malformed_amount_renders_as_zero() {
        assert_eq!(
            signed_amount(&tx(TransactionKind::Expense, "garbage"), "$"),
            "-$0.00"
        );
    }

    #[test]
    fn test_amount_class_by_kind() {
        assert_eq!(amount_class(TransactionKind::Income), "amount positive");
        assert_eq!(amount_class(TransactionKind::Expense), "amount negative");
        assert_eq!(amount_class(TransactionKind::Unknown), "amount");
    }
}
