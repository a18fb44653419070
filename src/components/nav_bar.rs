//! Top navigation bar: section links, dark mode toggle, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guard::{self, RouteAccess};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::theme;

/// Shared navigation bar for signed-in pages. The admin link only renders
/// for sessions the admin guard would let through.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let session = store.state();
    let is_admin = move || guard::check_admin(&session.get()) == RouteAccess::Grant;
    let user_name = move || {
        session
            .get()
            .user
            .map(|user| user.full_name())
            .unwrap_or_default()
    };

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));
    };

    let logout_store = store.clone();
    let on_logout = move |_| {
        logout_store.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "InvestAI"
            </a>
            <div class="nav-bar__links">
                <a href="/">"Tableau de bord"</a>
                <a href="/transactions">"Transactions"</a>
                <a href="/import">"Import CSV"</a>
                <a href="/reports">"Rapports"</a>
                <a href="/notifications">"Notifications"</a>
                <Show when=is_admin>
                    <a href="/admin/users">"Utilisateurs"</a>
                </Show>
            </div>
            <div class="nav-bar__actions">
                <span class="nav-bar__user">{user_name}</span>
                <button
                    class="nav-bar__dark-toggle"
                    title="Mode sombre"
                    on:click=on_toggle_dark
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <button class="btn" on:click=on_logout>
                    "Déconnexion"
                </button>
            </div>
        </nav>
    }
}
