//! Dashboard: portfolio totals, per-portfolio cards, and valuation history.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::PortfolioSummary;
use crate::state::session::SessionStore;
use crate::util::format::{format_date_fr, format_eur, format_percent};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

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

    let valuation = LocalResource::new({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move {
                let Some(token) = store.access_token() else {
                    return Vec::new();
                };
                api::fetch_valuation(&token, "1y").await.unwrap_or_default()
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <h1>"Tableau de bord"</h1>

            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || portfolios.get().map(|list| summary_view(&list))}
            </Suspense>

            <section class="dashboard-page__history">
                <h2>"Évolution du patrimoine"</h2>
                <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                    {move || {
                        valuation
                            .get()
                            .map(|points| {
                                let rows = points
                                    .iter()
                                    .rev()
                                    .take(6)
                                    .map(|point| {
                                        view! {
                                            <tr>
                                                <td>{format_date_fr(&point.date)}</td>
                                                <td>{format_eur(point.value)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <table class="dashboard-page__valuation">
                                        <tbody>{rows}</tbody>
                                    </table>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// Totals row plus one card per portfolio.
fn summary_view(portfolios: &[PortfolioSummary]) -> impl IntoView + use<> {
    let value: f64 = portfolios.iter().map(|p| p.current_value).sum();
    let invested: f64 = portfolios.iter().map(|p| p.total_invested).sum();
    let gain = value - invested;
    let gain_pct = if invested > 0.0 { gain / invested * 100.0 } else { 0.0 };

    let cards = portfolios
        .iter()
        .map(|portfolio| {
            let gain = portfolio.gain();
            view! {
                <div class="portfolio-card">
                    <span class="portfolio-card__name">{portfolio.name.clone()}</span>
                    <span class="portfolio-card__platform">{portfolio.platform.clone()}</span>
                    <span class="portfolio-card__value">{format_eur(portfolio.current_value)}</span>
                    <span
                        class="portfolio-card__gain"
                        class=("portfolio-card__gain--down", gain < 0.0)
                    >
                        {format_eur(gain)}
                    </span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="dashboard-page__stats">
            <StatCard label="Valeur totale" value=format_eur(value)/>
            <StatCard label="Investi" value=format_eur(invested)/>
            <StatCard
                label="Plus-value"
                value=format_eur(gain)
                delta=format_percent(gain_pct)
            />
        </section>
        <section class="dashboard-page__portfolios">{cards}</section>
    }
}
