use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::forms::TransactionForm;
use components::header::Header;
use components::notification::NotificationToast;
use components::summary_cards::SummaryCards;
use components::transactions::TransactionViewContainer;
use hooks::use_notifications::use_notifications;
use hooks::use_transactions::use_transactions;
use services::api::ApiClient;
use shared::TrackerConfig;

#[function_component(App)]
fn app() -> Html {
    // Single construction point for configuration and the API client;
    // everything below receives them explicitly.
    let config = use_memo((), |_| TrackerConfig::default());
    let api_client = use_memo(config.clone(), |config| ApiClient::new(config));

    let notifications = use_notifications(config.notification_duration_ms);
    let transactions = use_transactions(&api_client, &config, &notifications.show);

    // Initial load.
    {
        let refresh = transactions.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    html! {
        <>
            <Header
                net_balance={transactions.state.summary.net_balance}
                currency_symbol={config.currency_symbol.clone()}
            />

            <NotificationToast
                notification={notifications.current.clone()}
                on_dismiss={notifications.dismiss.clone()}
            />

            <main class="main">
                <div class="container">
                    <SummaryCards
                        summary={transactions.state.summary}
                        currency_symbol={config.currency_symbol.clone()}
                    />

                    <TransactionForm
                        title={transactions.state.title.clone()}
                        amount={transactions.state.amount.clone()}
                        date={transactions.state.date.clone()}
                        kind={transactions.state.kind}
                        category={transactions.state.category.clone()}
                        submitting={transactions.state.submitting}
                        form_error={transactions.state.form_error.clone()}
                        on_title_change={transactions.actions.on_title_change.clone()}
                        on_amount_change={transactions.actions.on_amount_change.clone()}
                        on_date_change={transactions.actions.on_date_change.clone()}
                        on_kind_change={transactions.actions.on_kind_change.clone()}
                        on_category_change={transactions.actions.on_category_change.clone()}
                        on_submit={transactions.actions.submit.clone()}
                    />

                    <TransactionViewContainer
                        transactions={transactions.state.transactions.clone()}
                        loading={transactions.state.loading}
                        currency_symbol={config.currency_symbol.clone()}
                        on_delete={transactions.actions.remove.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
