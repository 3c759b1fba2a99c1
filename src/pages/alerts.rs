//! Alerts page with per-row acknowledge actions.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::net::resources::load_alerts;

/// Alerts page. Protected; redirects to `/login` without a session.
#[component]
pub fn AlertsPage() -> impl IntoView {
    crate::guard::use_session_guard();

    let alerts = LocalResource::new(|| load_alerts());

    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>"Alerts"</h1>

                <Suspense fallback=move || view! { <p>"Loading alerts..."</p> }>
                    {move || {
                        alerts.get().map(|res| match res {
                            Ok(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Severity"</th>
                                                <th>"Message"</th>
                                                <th>"Raised"</th>
                                                <th>"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|alert| {
                                                    let action = if alert.status == "acknowledged" {
                                                        view! { <span class="badge badge--ok">"Acknowledged"</span> }
                                                            .into_any()
                                                    } else {
                                                        let id = alert.id.clone();
                                                        view! {
                                                            <button
                                                                class="btn"
                                                                on:click=move |_| {
                                                                    #[cfg(feature = "hydrate")]
                                                                    {
                                                                        let id = id.clone();
                                                                        leptos::task::spawn_local(async move {
                                                                            if crate::net::resources::ack_alert(id).await.is_ok() {
                                                                                alerts.refetch();
                                                                            }
                                                                        });
                                                                    }
                                                                    #[cfg(not(feature = "hydrate"))]
                                                                    {
                                                                        let _ = &id;
                                                                    }
                                                                }
                                                            >
                                                                "Acknowledge"
                                                            </button>
                                                        }
                                                            .into_any()
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>{alert.severity}</td>
                                                            <td>{alert.message}</td>
                                                            <td>{alert.created_at}</td>
                                                            <td>{action}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <div class="alert alert--error">{e}</div> }.into_any(),
                        })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
