use shared::{
    compute_summary, validate_draft, NewTransaction, Summary, TrackerConfig, Transaction,
    TransactionKind,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_notifications::NotificationKind;
use crate::services::api::ApiClient;
use crate::services::csrf;
use crate::services::date_utils;
use crate::services::logging::Logger;

/// Everything the transaction views render from: the server-confirmed
/// list, the summary derived from it, and the create-form fields.
#[derive(Clone, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
    pub loading: bool,

    // Create-form state
    pub title: String,
    pub amount: String,
    pub date: String,
    pub kind: TransactionKind,
    pub category: String,
    pub submitting: bool,
    /// Local validation message shown inline under the form.
    pub form_error: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct TransactionsActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub remove: Callback<i64>,
    pub on_title_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_kind_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
}

pub struct UseTransactionsResult {
    pub state: TransactionsState,
    pub actions: TransactionsActions,
}

/// State and actions for the transaction list and its create form.
///
/// Every successful mutation triggers a full re-fetch rather than a local
/// patch, so the list and summary always reflect server-confirmed data.
#[hook]
pub fn use_transactions(
    api_client: &ApiClient,
    config: &TrackerConfig,
    notify: &Callback<(String, NotificationKind)>,
) -> UseTransactionsResult {
    let transactions = use_state(Vec::<Transaction>::new);
    let summary = use_state(Summary::default);
    let loading = use_state(|| true);

    // The date field starts at today; the user may pick any other date.
    let title = use_state(String::new);
    let amount = use_state(String::new);
    let date = use_state(date_utils::current_date);
    let kind = use_state(|| TransactionKind::Expense);
    let category = use_state(|| TransactionKind::Expense.default_category().to_string());
    let submitting = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);

    let refresh = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let transactions = transactions.clone();
        let summary = summary.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let notify = notify.clone();
            let transactions = transactions.clone();
            let summary = summary.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list().await {
                    Ok(list) => {
                        summary.set(compute_summary(&list));
                        transactions.set(list);
                    }
                    Err(error) => {
                        // Keep whatever was rendered before; just tell the user.
                        Logger::error("transactions", &error.to_string());
                        notify.emit((error.to_string(), NotificationKind::Error));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Rebuilt every render: a state handle dereferences to the value it
    // was created with, so a memoized submit would validate stale fields.
    let submit = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        let csrf_cookie_name = config.csrf_cookie_name.clone();
        let title = title.clone();
        let amount = amount.clone();
        let date = date.clone();
        let kind = kind.clone();
        let category = category.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();

        Callback::from(move |_: ()| {
            // Local validation happens before anything else; a failing
            // draft stays in the form and the network is never involved.
            let validation = validate_draft(&title, &amount, &date, &category);
            if !validation.is_valid {
                form_error.set(validation.first_message());
                return;
            }
            form_error.set(None);

            let draft = NewTransaction {
                title: title.trim().to_string(),
                amount: validation.cleaned_amount.unwrap_or(0.0),
                date: (*date).clone(),
                kind: *kind,
                category: (*category).clone(),
            };

            let api_client = api_client.clone();
            let notify = notify.clone();
            let refresh = refresh.clone();
            let csrf_cookie_name = csrf_cookie_name.clone();
            let title = title.clone();
            let amount = amount.clone();
            let date = date.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);

                let token = csrf::csrf_token(&csrf_cookie_name);
                match api_client.create(&draft, token).await {
                    Ok(created) => {
                        Logger::info("transactions", &format!("created transaction {}", created.id));
                        title.set(String::new());
                        amount.set(String::new());
                        date.set(date_utils::current_date());
                        notify.emit(("Transaction added.".to_string(), NotificationKind::Success));
                        refresh.emit(());
                    }
                    Err(error) => {
                        // Entered values stay put so nothing needs retyping.
                        Logger::warn("transactions", &error.to_string());
                        notify.emit((error.to_string(), NotificationKind::Error));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let remove = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        let csrf_cookie_name = config.csrf_cookie_name.clone();

        use_callback((), move |id: i64, _| {
            // Synchronous yes/no gate; declining issues no request at all.
            if !gloo::dialogs::confirm("Delete this transaction? This cannot be undone.") {
                return;
            }

            let api_client = api_client.clone();
            let notify = notify.clone();
            let refresh = refresh.clone();
            let csrf_cookie_name = csrf_cookie_name.clone();

            spawn_local(async move {
                let token = csrf::csrf_token(&csrf_cookie_name);
                match api_client.remove(id, token).await {
                    Ok(()) => {
                        notify.emit(("Transaction deleted.".to_string(), NotificationKind::Success));
                        refresh.emit(());
                    }
                    Err(error) => {
                        Logger::error("transactions", &error.to_string());
                        notify.emit((error.to_string(), NotificationKind::Error));
                    }
                }
            });
        })
    };

    let on_title_change = {
        let title = title.clone();
        let form_error = form_error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
            form_error.set(None);
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        let form_error = form_error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
            form_error.set(None);
        })
    };

    let on_date_change = {
        let date = date.clone();
        let form_error = form_error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
            form_error.set(None);
        })
    };

    let on_kind_change = {
        let kind = kind.clone();
        let category = category.clone();
        let form_error = form_error.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let next = match select.value().as_str() {
                "INCOME" => TransactionKind::Income,
                _ => TransactionKind::Expense,
            };
            kind.set(next);
            // The category list always matches the kind; switching kinds
            // resets the selection to the first entry of the new set.
            category.set(next.default_category().to_string());
            form_error.set(None);
        })
    };

    let on_category_change = {
        let category = category.clone();
        let form_error = form_error.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
            form_error.set(None);
        })
    };

    let state = TransactionsState {
        transactions: (*transactions).clone(),
        summary: *summary,
        loading: *loading,
        title: (*title).clone(),
        amount: (*amount).clone(),
        date: (*date).clone(),
        kind: *kind,
        category: (*category).clone(),
        submitting: *submitting,
        form_error: (*form_error).clone(),
    };

    let actions = TransactionsActions {
        refresh,
        submit,
        remove,
        on_title_change,
        on_amount_change,
        on_date_change,
        on_kind_change,
        on_category_change,
    };

    UseTransactionsResult { state, actions }
}
