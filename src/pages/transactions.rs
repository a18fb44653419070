//! Transactions page: filterable history plus an add-transaction form.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::net::types::TransactionKind;
use crate::state::session::SessionStore;
use crate::state::transactions::TransactionForm;
use crate::util::format::{format_date_fr, format_eur};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let kind_filter = RwSignal::new(String::new());

    let transactions = LocalResource::new({
        let store = store.clone();
        move || {
            let store = store.clone();
            let kind = kind_filter.get();
            async move {
                let Some(token) = store.access_token() else {
                    return Vec::new();
                };
                let kind = (!kind.is_empty()).then_some(kind);
                api::fetch_transactions(&token, kind.as_deref())
                    .await
                    .unwrap_or_default()
            }
        }
    });

    let portfolios = LocalResource::new({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move {
                let Some(token) = store.access_token() else {
                    return Vec::new();
                };
                api::fetch_portfolios(&token).await.unwrap_or_default()
            }
        }
    });

    let portfolio_id = RwSignal::new(String::new());
    let kind = RwSignal::new("buy".to_owned());
    let asset = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_price = RwSignal::new(String::new());
    let fees = RwSignal::new(String::new());
    let executed_at = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let submit_store = store.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = TransactionForm {
            portfolio_id: portfolio_id.get_untracked(),
            kind: kind.get_untracked(),
            asset: asset.get_untracked(),
            quantity: quantity.get_untracked(),
            unit_price: unit_price.get_untracked(),
            fees: fees.get_untracked(),
            executed_at: executed_at.get_untracked(),
        };
        match form.validate() {
            Ok(new_transaction) => {
                form_error.set(None);
                #[cfg(feature = "hydrate")]
                {
                    let store = submit_store.clone();
                    leptos::task::spawn_local(async move {
                        let Some(token) = store.access_token() else {
                            return;
                        };
                        if api::create_transaction(&token, &new_transaction)
                            .await
                            .is_some()
                        {
                            asset.set(String::new());
                            quantity.set(String::new());
                            unit_price.set(String::new());
                            fees.set(String::new());
                            transactions.refetch();
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = new_transaction;
                }
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="transactions-page">
            <NavBar/>
            <h1>"Transactions"</h1>

            <form class="transaction-form" on:submit=on_submit>
                <select
                    prop:value=move || portfolio_id.get()
                    on:change=move |ev| portfolio_id.set(event_target_value(&ev))
                >
                    <option value="">"Portefeuille..."</option>
                    {move || {
                        portfolios
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|p| {
                                        view! { <option value=p.id.clone()>{p.name.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>
                <select
                    prop:value=move || kind.get()
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    {TransactionKind::ALL
                        .iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    type="text"
                    placeholder="Actif (ex : MSFT)"
                    prop:value=move || asset.get()
                    on:input=move |ev| asset.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Quantité"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Prix unitaire"
                    prop:value=move || unit_price.get()
                    on:input=move |ev| unit_price.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Frais"
                    prop:value=move || fees.get()
                    on:input=move |ev| fees.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || executed_at.get()
                    on:input=move |ev| executed_at.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">
                    "Ajouter"
                </button>
                <Show when=move || form_error.get().is_some()>
                    <p class="transaction-form__error">
                        {move || form_error.get().unwrap_or_default()}
                    </p>
                </Show>
            </form>

            <div class="transactions-page__filter">
                <label>
                    "Filtrer par type"
                    <select
                        prop:value=move || kind_filter.get()
                        on:change=move |ev| kind_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Tous"</option>
                        {TransactionKind::ALL
                            .iter()
                            .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    transactions
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"Aucune transaction."</p> }.into_any()
                            } else {
                                let rows = list
                                    .into_iter()
                                    .map(|tx| {
                                        let amount = tx.quantity * tx.unit_price;
                                        view! {
                                            <tr>
                                                <td>{format_date_fr(&tx.executed_at)}</td>
                                                <td>{tx.kind.label()}</td>
                                                <td>{tx.asset}</td>
                                                <td>{tx.quantity}</td>
                                                <td>{format_eur(amount)}</td>
                                                <td>{format_eur(tx.fees)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <table class="transactions-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Date"</th>
                                                <th>"Type"</th>
                                                <th>"Actif"</th>
                                                <th>"Quantité"</th>
                                                <th>"Montant"</th>
                                                <th>"Frais"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{rows}</tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
