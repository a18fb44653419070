//! Stat tile for dashboard totals.

use leptos::prelude::*;

/// A labelled figure, optionally with a delta line under it.
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    #[prop(optional)] delta: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {delta.map(|delta| view! { <span class="stat-card__delta">{delta}</span> })}
        </div>
    }
}
