use shared::TransactionKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    // Form state, owned by the use_transactions hook
    pub title: String,
    pub amount: String,
    pub date: String,
    pub kind: TransactionKind,
    pub category: String,
    pub submitting: bool,
    pub form_error: Option<String>,

    // Event handlers
    pub on_title_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_kind_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

/// Create-transaction form. The category selector is rebuilt from the
/// selected kind on every render, so its options can never drift from the
/// kind the user picked.
#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="form-section">
            <h2>{"Add a Transaction"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="transaction-form" {onsubmit}>
                <div class="form-group">
                    <label for="title">{"Title"}</label>
                    <input
                        type="text"
                        id="title"
                        placeholder="Weekly groceries, March salary..."
                        value={props.title.clone()}
                        onchange={props.on_title_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={props.amount.clone()}
                        onchange={props.on_amount_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        value={props.date.clone()}
                        onchange={props.on_date_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="kind">{"Type"}</label>
                    <select
                        id="kind"
                        onchange={props.on_kind_change.clone()}
                        disabled={props.submitting}
                    >
                        {for [TransactionKind::Expense, TransactionKind::Income].iter().map(|kind| {
                            html! {
                                <option
                                    value={kind.wire_token()}
                                    selected={*kind == props.kind}
                                >
                                    {kind.label()}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        onchange={props.on_category_change.clone()}
                        disabled={props.submitting}
                    >
                        {for props.kind.categories().iter().map(|category| {
                            html! {
                                <option
                                    value={*category}
                                    selected={props.category == *category}
                                >
                                    {*category}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={props.submitting}
                >
                    {if props.submitting { "Saving..." } else { "Add Transaction" }}
                </button>
            </form>
        </section>
    }
}
