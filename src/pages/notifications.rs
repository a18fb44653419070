//! Notifications page: list with mark-as-read actions.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::state::session::SessionStore;
use crate::util::format::format_date_fr;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let notifications = LocalResource::new({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move {
                let Some(token) = store.access_token() else {
                    return Vec::new();
                };
                api::fetch_notifications(&token).await.unwrap_or_default()
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let mark_store = store.clone();
    let mark_read = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let store = mark_store.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = store.access_token() else {
                    return;
                };
                if api::mark_notification_read(&token, &id).await {
                    notifications.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="notifications-page">
            <NavBar/>
            <h1>"Notifications"</h1>
            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    notifications
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"Aucune notification."</p> }.into_any()
                            } else {
                                let items = list
                                    .into_iter()
                                    .map(|notification| {
                                        let unread = !notification.read;
                                        let id = notification.id.clone();
                                        let date = format_date_fr(&notification.created_at);
                                        view! {
                                            <li
                                                class="notification"
                                                class=("notification--unread", unread)
                                            >
                                                <strong>{notification.title}</strong>
                                                <span>{notification.body}</span>
                                                <span class="notification__date">{date}</span>
                                                {unread
                                                    .then(|| {
                                                        let id = id.clone();
                                                        view! {
                                                            <button
                                                                class="btn"
                                                                on:click=move |_| mark_read.run(id.clone())
                                                            >
                                                                "Marquer comme lu"
                                                            </button>
                                                        }
                                                    })}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! { <ul class="notifications-page__list">{items}</ul> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
