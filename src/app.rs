//! Root application component with routing, context providers, and guards.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::auth::HttpAuthApi;
use crate::pages::{
    admin_users::AdminUsersPage, dashboard::DashboardPage, import::ImportPage, login::LoginPage,
    notifications::NotificationsPage, reports::ReportsPage, transactions::TransactionsPage,
    verify_email::VerifyEmailPage,
};
use crate::state::guard::{self, RouteAccess};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store (single authority over authentication state) and
/// provides it via context; sets up client-side routing with guard wrappers.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(HttpAuthApi);
    let ui = RwSignal::new(UiState::default());

    #[cfg(feature = "hydrate")]
    {
        // Resume a persisted session; the chained profile fetch validates it
        // against the server and degrades to logout if no longer honored.
        if store.restore_from_storage() {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                store.fetch_current_user().await;
            });
        }

        let dark = crate::util::theme::read_preference();
        crate::util::theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    }

    provide_context(store);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/investai.css"/>
        <Title text="InvestAI"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("transactions")
                    view=|| view! { <Protected><TransactionsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("import")
                    view=|| view! { <Protected><ImportPage/></Protected> }
                />
                <Route
                    path=StaticSegment("reports")
                    view=|| view! { <Protected><ReportsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("notifications")
                    view=|| view! { <Protected><NotificationsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| view! { <AdminOnly><AdminUsersPage/></AdminOnly> }
                />
            </Routes>
        </Router>
    }
}

/// Gate for signed-in routes, evaluated on every render of the route.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();

    move || match guard::check_private(&session.get()) {
        RouteAccess::Grant => children().into_any(),
        RouteAccess::RedirectToLogin | RouteAccess::RedirectToHome => {
            view! { <Redirect path="/login"/> }.into_any()
        }
    }
}

/// Gate for admin routes: anonymous users go to login, signed-in non-admins
/// to the dashboard.
#[component]
fn AdminOnly(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();

    move || match guard::check_admin(&session.get()) {
        RouteAccess::Grant => children().into_any(),
        RouteAccess::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
        RouteAccess::RedirectToHome => view! { <Redirect path="/"/> }.into_any(),
    }
}
