//! Email verification landing page.
//!
//! Consumes the token from the query string. When the server mints a session
//! from the link, the tokens are installed out of band (no password login)
//! and the user lands on the dashboard.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_query_map;

use crate::state::session::SessionStore;

#[derive(Clone, PartialEq)]
enum VerifyOutcome {
    SessionStarted,
    Verified,
    Failed(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let query = use_query_map();

    let outcome = LocalResource::new({
        let store = store.clone();
        move || {
            let store = store.clone();
            let token = query.with(|q| q.get("token")).unwrap_or_default();
            async move {
                if token.is_empty() {
                    return VerifyOutcome::Failed("Lien de vérification invalide".to_owned());
                }
                match store.verify_email(&token).await {
                    Ok(true) => {
                        store.fetch_current_user().await;
                        VerifyOutcome::SessionStarted
                    }
                    Ok(false) => VerifyOutcome::Verified,
                    Err(err) => VerifyOutcome::Failed(err.user_message()),
                }
            }
        }
    });

    view! {
        <div class="verify-page">
            <h1>"Vérification de l'email"</h1>
            <Suspense fallback=move || view! { <p>"Vérification en cours..."</p> }>
                {move || {
                    outcome
                        .get()
                        .map(|outcome| match outcome {
                            VerifyOutcome::SessionStarted => {
                                view! { <Redirect path="/"/> }.into_any()
                            }
                            VerifyOutcome::Verified => {
                                view! {
                                    <p>
                                        "Votre adresse est vérifiée. "
                                        <a href="/login">"Se connecter"</a>
                                    </p>
                                }
                                    .into_any()
                            }
                            VerifyOutcome::Failed(message) => {
                                view! { <p class="verify-page__error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
