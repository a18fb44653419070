//! Login page with an email/password form bound to the session store.
//!
//! The store re-raises login failures precisely so this form can show a
//! field-level message from the rejection instead of polling store state.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let store = expect_context::<SessionStore>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if pending.get_untracked() {
                return;
            }
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            if email_value.is_empty() || password_value.is_empty() {
                error.set(Some("Email et mot de passe requis".to_owned()));
                return;
            }
            pending.set(true);
            error.set(None);
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.login(&email_value, &password_value).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(err) => error.set(Some(err.user_message())),
                }
                pending.set(false);
            });
        }
    };

    view! {
        <div class="login-page">
            <h1>"InvestAI"</h1>
            <p>"Suivez vos investissements"</p>
            <form class="login-form" on:submit=on_submit>
                <label class="login-form__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </label>
                <label class="login-form__label">
                    "Mot de passe"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
                </button>
            </form>
        </div>
    }
}
