//! Admin user management: role changes and account deletion.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::api;
use crate::state::session::SessionStore;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let users = LocalResource::new({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move {
                let Some(token) = store.access_token() else {
                    return Vec::new();
                };
                api::fetch_users(&token).await.unwrap_or_default()
            }
        }
    });

    #[cfg(feature = "hydrate")]
    let role_store = store.clone();
    let set_role = Callback::new(move |(id, role): (String, String)| {
        #[cfg(feature = "hydrate")]
        {
            let store = role_store.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = store.access_token() else {
                    return;
                };
                if api::update_user_role(&token, &id, &role).await {
                    users.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, role);
        }
    });

    #[cfg(feature = "hydrate")]
    let delete_store = store.clone();
    let delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let store = delete_store.clone();
            leptos::task::spawn_local(async move {
                let Some(token) = store.access_token() else {
                    return;
                };
                if api::delete_user(&token, &id).await {
                    users.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="admin-users-page">
            <NavBar/>
            <h1>"Utilisateurs"</h1>
            <Suspense fallback=move || view! { <p>"Chargement..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| {
                            let rows = list
                                .into_iter()
                                .map(|user| {
                                    let name = user.full_name();
                                    let role_id = user.id.clone();
                                    let delete_id = user.id.clone();
                                    let mfa = if user.mfa_enabled { "Oui" } else { "Non" };
                                    view! {
                                        <tr>
                                            <td>{user.email}</td>
                                            <td>{name}</td>
                                            <td>
                                                <select
                                                    prop:value=user.role.as_str()
                                                    on:change=move |ev| {
                                                        set_role
                                                            .run((role_id.clone(), event_target_value(&ev)))
                                                    }
                                                >
                                                    <option value="user">"Utilisateur"</option>
                                                    <option value="admin">"Administrateur"</option>
                                                </select>
                                            </td>
                                            <td>{mfa}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete.run(delete_id.clone())
                                                >
                                                    "Supprimer"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <table class="admin-users-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Email"</th>
                                            <th>"Nom"</th>
                                            <th>"Rôle"</th>
                                            <th>"MFA"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
