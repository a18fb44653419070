//! CSV import page.
//!
//! Platform auto-detection and row parsing are the backend's job; this page
//! reads the chosen file, uploads its contents, and renders the report.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::types::ImportReport;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

#[component]
pub fn ImportPage() -> impl IntoView {
    // (file name, contents) once the browser has read the selection.
    let selected = RwSignal::new(None::<(String, String)>);
    let report = RwSignal::new(None::<ImportReport>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let store = expect_context::<SessionStore>();

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let name = file.name();
            report.set(None);
            error.set(None);
            leptos::task::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                    Ok(text) => {
                        if let Some(text) = text.as_string() {
                            selected.set(Some((name, text)));
                        }
                    }
                    Err(_) => error.set(Some("Lecture du fichier impossible".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_import = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some((_, contents)) = selected.get_untracked() else {
                return;
            };
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);
            let store = store.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = store.access_token() else {
                    busy.set(false);
                    return;
                };
                match crate::net::api::import_csv(&token, &contents).await {
                    Ok(result) => report.set(Some(result)),
                    Err(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="import-page">
            <NavBar/>
            <h1>"Import CSV"</h1>
            <p>
                "Déposez un export CSV de votre courtier ; la plateforme d'origine est détectée automatiquement."
            </p>

            <input type="file" accept=".csv,text/csv" on:change=on_file/>
            <Show when=move || selected.get().is_some()>
                <p class="import-page__file">
                    {move || selected.get().map(|(name, _)| name).unwrap_or_default()}
                </p>
            </Show>
            <button
                class="btn btn--primary"
                disabled=move || busy.get() || selected.get().is_none()
                on:click=on_import
            >
                {move || if busy.get() { "Import..." } else { "Importer" }}
            </button>

            <Show when=move || error.get().is_some()>
                <p class="import-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                report
                    .get()
                    .map(|report| {
                        let errors = report
                            .errors
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect::<Vec<_>>();
                        view! {
                            <div class="import-report">
                                <p>
                                    "Plateforme détectée : "
                                    <strong>{report.platform}</strong>
                                </p>
                                <p>
                                    {report.imported} " lignes importées, " {report.skipped}
                                    " ignorées"
                                </p>
                                <ul class="import-report__errors">{errors}</ul>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
