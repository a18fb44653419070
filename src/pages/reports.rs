//! Report generation page: tax and performance exports (PDF/Excel).

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let year = RwSignal::new("2025".to_owned());
    let link = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let store = expect_context::<SessionStore>();

    let generate = Callback::new(move |(kind, format): (&'static str, &'static str)| {
        #[cfg(feature = "hydrate")]
        {
            if busy.get_untracked() {
                return;
            }
            let Ok(year_value) = year.get_untracked().parse::<u16>() else {
                error.set(Some("Année invalide".to_owned()));
                return;
            };
            busy.set(true);
            link.set(None);
            error.set(None);
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = store.access_token() else {
                    busy.set(false);
                    return;
                };
                match crate::net::api::generate_report(&token, kind, format, year_value).await {
                    Ok(url) => link.set(Some(url)),
                    Err(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, format);
        }
    });

    view! {
        <div class="reports-page">
            <NavBar/>
            <h1>"Rapports"</h1>

            <label class="reports-page__year">
                "Année fiscale"
                <input
                    type="number"
                    prop:value=move || year.get()
                    on:input=move |ev| year.set(event_target_value(&ev))
                />
            </label>

            <div class="reports-page__actions">
                <button
                    class="btn"
                    disabled=move || busy.get()
                    on:click=move |_| generate.run(("tax", "pdf"))
                >
                    "Rapport fiscal (PDF)"
                </button>
                <button
                    class="btn"
                    disabled=move || busy.get()
                    on:click=move |_| generate.run(("tax", "xlsx"))
                >
                    "Rapport fiscal (Excel)"
                </button>
                <button
                    class="btn"
                    disabled=move || busy.get()
                    on:click=move |_| generate.run(("performance", "pdf"))
                >
                    "Performance (PDF)"
                </button>
            </div>

            <Show when=move || link.get().is_some()>
                <p>
                    <a href=move || link.get().unwrap_or_default()>"Télécharger le rapport"</a>
                </p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="reports-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
